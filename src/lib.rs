// nsq-lookup - client for the nsqlookupd discovery API
// Library exports

pub mod client; // Async and blocking lookupd clients
pub mod config;
pub mod errors;

pub use client::{BlockingLookupClient, LookupClient, Producer, ServerInfo};
pub use config::LookupConfig;
pub use errors::{ErrorKind, LookupError};
