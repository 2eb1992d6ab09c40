//! Registry configuration persistence
//!
//! Re-exports the shared config types and stores them as TOML through confy.

use std::path::Path;

use thiserror::Error;

pub use kitchen_timer_types::{MinutesDisplay, RegistryConfig};

const APP_NAME: &str = "kitchen-timer";
const CONFIG_NAME: &str = "config";

/// Errors during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[source] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),
}

fn or_defaults(result: Result<RegistryConfig, confy::ConfyError>) -> RegistryConfig {
    result.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "failed to load config, using defaults");
        RegistryConfig::default()
    })
}

/// Extension trait for RegistryConfig persistence
pub trait RegistryConfigExt: Sized {
    /// Load from the platform config dir, falling back to defaults
    fn load() -> Self;
    /// Load from `path`, falling back to defaults
    fn load_from_or_default(path: &Path) -> Self;
    fn save(&self) -> Result<(), ConfigError>;
    fn load_from(path: &Path) -> Result<Self, ConfigError>;
    fn save_to(&self, path: &Path) -> Result<(), ConfigError>;
}

impl RegistryConfigExt for RegistryConfig {
    fn load() -> Self {
        or_defaults(confy::load(APP_NAME, CONFIG_NAME))
    }

    fn load_from_or_default(path: &Path) -> Self {
        or_defaults(confy::load_path(path))
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        confy::load_path(path).map_err(ConfigError::Load)
    }

    fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        confy::store_path(path, self).map_err(ConfigError::Save)
    }
}
