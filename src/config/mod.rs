// Configuration module
// Lookupd target settings and their loading from disk or environment

mod loader;
mod settings;

pub use loader::{load_config, load_config_from, ADDRESS_ENV_VAR};
pub use settings::{LookupConfig, DEFAULT_HTTP_PORT};
