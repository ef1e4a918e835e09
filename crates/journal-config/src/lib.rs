//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, JournalSettings, LoggingConfig};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
///
/// The file is optional; environment variables prefixed `JOURNAL__`
/// override it either way.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("JOURNAL")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}
