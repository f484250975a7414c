pub mod api;
pub mod core;
pub mod input;
pub mod renderer;
pub mod scene;
pub mod sim;

// Re-export key types at crate root for convenience
pub use crate::api::runner::GlobeRunner;
pub use crate::core::config::GlobeConfig;
pub use crate::core::rng::Rng;
pub use crate::core::time::FixedTimestep;
pub use crate::input::queue::{InputEvent, InputQueue};
pub use crate::renderer::instance::{FlakeInstance, SnapshotBuffer};
pub use crate::scene::camera::OrbitCamera;
pub use crate::scene::lights::{hut_decorations, HutLight};
pub use crate::scene::sky::DayNightCycle;
pub use crate::scene::stars::{Star, StarField};
pub use crate::sim::environment::Environment;
pub use crate::sim::snowflake::Snowflake;
pub use crate::sim::SnowGlobe;
