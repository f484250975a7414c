pub mod config;
pub mod rng;
pub mod time;
