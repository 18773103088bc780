//! Configuration file loading

pub mod file_config;
pub mod loader;

pub use file_config::{ConfigValidationError, FileConfig};
pub use loader::ConfigLoader;
