pub mod config;
pub mod disk;
pub mod logging;

pub use config::{load_config, Config};
