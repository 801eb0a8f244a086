//! Configuration for the demo binary and store defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, StoreConfig};
