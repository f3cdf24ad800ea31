// Lookup client errors
//
// Every failure a lookup call can produce. Errors are returned to the caller
// untouched; the client never retries or logs them. `suggestion()` turns the
// common operator mistakes into an actionable hint.

use std::fmt;

use thiserror::Error;

/// Coarse classification of a [`LookupError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Host, port or path missing or invalid. Raised before any network I/O.
    Configuration,
    /// DNS, connect, timeout or I/O failure while talking to nsqlookupd.
    Transport,
    /// The daemon answered, but not with something we could use.
    Protocol,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::Transport => "transport",
            ErrorKind::Protocol => "protocol",
        };
        f.write_str(name)
    }
}

/// Errors returned by [`crate::LookupClient`] and [`crate::BlockingLookupClient`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LookupError {
    /// The client is not configured well enough to build a request.
    #[error("configuration error: {field} {reason}")]
    Configuration {
        field: &'static str,
        reason: String,
    },

    /// The request never produced a complete response.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response from an endpoint whose body we need to parse.
    #[error("HTTP {status} from {url}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    /// Body was not JSON, or a member had the wrong shape.
    #[error("malformed response from {url}: {reason}")]
    MalformedResponse {
        url: String,
        reason: String,
    },
}

impl LookupError {
    pub(crate) fn configuration(field: &'static str, reason: impl Into<String>) -> Self {
        LookupError::Configuration {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(url: &str, reason: impl Into<String>) -> Self {
        LookupError::MalformedResponse {
            url: url.to_string(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::Configuration { .. } => ErrorKind::Configuration,
            LookupError::Transport { .. } => ErrorKind::Transport,
            LookupError::Status { .. } | LookupError::MalformedResponse { .. } => {
                ErrorKind::Protocol
            }
        }
    }

    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }

    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    pub fn is_protocol(&self) -> bool {
        self.kind() == ErrorKind::Protocol
    }

    /// HTTP status of a `Status` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            LookupError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short hint for the operator, when there is an obvious one.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            LookupError::Configuration { field: "host", .. } => {
                Some("set the nsqlookupd host, e.g. LookupClient::new(\"127.0.0.1\")")
            }
            LookupError::Configuration { field: "port", .. } => {
                Some("set the nsqlookupd HTTP port (4161 by default)")
            }
            LookupError::Transport { source, .. } if source.is_timeout() => {
                Some("nsqlookupd did not answer in time; raise the timeout or check the daemon load")
            }
            LookupError::Transport { source, .. } if source.is_connect() => {
                Some("is nsqlookupd running and listening on its HTTP address?")
            }
            LookupError::Status { status: 404, .. } => {
                Some("the daemon does not know this endpoint; check the nsqlookupd version")
            }
            _ => None,
        }
    }
}
