//! Settings module - configuration sources consulted by the core services.

mod env_source;
mod settings_constants;
mod settings_model;
mod settings_traits;

pub use env_source::EnvConfigurationSource;
pub use settings_constants::*;
pub use settings_model::ConfigSnapshot;
pub use settings_traits::ConfigurationSource;
