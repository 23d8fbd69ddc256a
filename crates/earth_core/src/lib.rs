pub mod body;
pub mod config;
pub mod error;
pub mod format;

pub use body::{CelestialBodyInfo, EARTH};
pub use config::ViewConfig;
pub use error::ConfigError;
