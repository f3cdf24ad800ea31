// Configuration loader
// Loads the lookupd target from ~/.nsq-lookup/config.toml or environment variable

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use super::settings::LookupConfig;

/// Environment variable holding an nsqlookupd HTTP address (`host:port`)
pub const ADDRESS_ENV_VAR: &str = "NSQLOOKUPD_HTTP_ADDRESS";

/// Load configuration from the user config file, then apply the environment
/// override.
///
/// Neither source is required; with both absent the default (unset) config
/// is returned and calls will fail with a configuration error.
pub fn load_config() -> Result<LookupConfig> {
    let mut config = match user_config_path() {
        Some(path) if path.exists() => load_config_from(&path)?,
        _ => LookupConfig::default(),
    };

    apply_env_override(&mut config, std::env::var(ADDRESS_ENV_VAR).ok())?;
    Ok(config)
}

/// Load configuration from an explicit TOML file
pub fn load_config_from(path: &Path) -> Result<LookupConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config: LookupConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    debug!(path = %path.display(), address = %config.address(), "Loaded lookupd config");
    Ok(config)
}

fn user_config_path() -> Option<std::path::PathBuf> {
    dirs::home_dir().map(|home| home.join(".nsq-lookup/config.toml"))
}

/// Host and port from the environment replace the file values; the timeout
/// is kept.
fn apply_env_override(config: &mut LookupConfig, address: Option<String>) -> Result<()> {
    let Some(address) = address.filter(|a| !a.trim().is_empty()) else {
        return Ok(());
    };

    let from_env = LookupConfig::from_address(&address)
        .with_context(|| format!("Invalid {} value '{}'", ADDRESS_ENV_VAR, address))?;

    debug!(address = %from_env.address(), "Using lookupd address from environment");
    config.host = from_env.host;
    config.port = from_env.port;
    Ok(())
}
