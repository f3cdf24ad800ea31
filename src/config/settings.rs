// Configuration structs

use serde::{Deserialize, Serialize};

use crate::errors::LookupError;

/// Port nsqlookupd serves its HTTP API on unless told otherwise
pub const DEFAULT_HTTP_PORT: u16 = 4161;

/// Where to find nsqlookupd.
///
/// Every field defaults, so an empty TOML file is valid. An unset host or
/// port is only reported when a call is attempted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Hostname or IP of the daemon
    pub host: String,

    /// HTTP port of the daemon (0 = unset)
    pub port: u16,

    /// Per-call deadline in seconds; transport default when absent
    pub timeout_seconds: Option<u64>,
}

impl LookupConfig {
    /// Parse an nsqlookupd HTTP address such as `127.0.0.1:4161`.
    ///
    /// A bare host gets [`DEFAULT_HTTP_PORT`].
    pub fn from_address(address: &str) -> Result<Self, LookupError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(LookupError::configuration("address", "cannot be empty"));
        }

        let (host, port) = if let Some(rest) = address.strip_prefix('[') {
            let (inner, after) = rest.split_once(']').ok_or_else(|| {
                LookupError::configuration("host", format!("unclosed '[' in '{}'", address))
            })?;
            if inner.is_empty() {
                return Err(LookupError::configuration("host", format!("missing in '{}'", address)));
            }
            let port = match after {
                "" => DEFAULT_HTTP_PORT,
                after => match after.strip_prefix(':') {
                    Some(port) => parse_port(port, address)?,
                    None => {
                        return Err(LookupError::configuration(
                            "port",
                            format!("expected ':' after ']' in '{}'", address),
                        ))
                    }
                },
            };
            (format!("[{}]", inner), port)
        } else if address.matches(':').count() > 1 {
            return Err(LookupError::configuration(
                "host",
                format!("IPv6 address '{}' must be bracketed, e.g. [::1]:4161", address),
            ));
        } else {
            match address.rsplit_once(':') {
                Some((host, port)) => (host.to_string(), parse_port(port, address)?),
                None => (address.to_string(), DEFAULT_HTTP_PORT),
            }
        };

        if host.is_empty() {
            return Err(LookupError::configuration("host", format!("missing in '{}'", address)));
        }

        Ok(Self {
            host,
            port,
            timeout_seconds: None,
        })
    }

    /// `host:port` as configured
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(port: &str, address: &str) -> Result<u16, LookupError> {
    port.parse::<u16>()
        .map_err(|_| LookupError::configuration("port", format!("invalid port in '{}'", address)))
}
