//! Decorative scene state: pure data plus phase math, no physics coupling.
//! A renderer reads these each frame; nothing here feeds back into the
//! simulation core.

pub mod camera;
pub mod lights;
pub mod sky;
pub mod stars;
