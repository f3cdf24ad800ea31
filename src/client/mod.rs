// nsqlookupd HTTP client
//
// LookupClient issues the lookupd queries asynchronously; BlockingLookupClient
// runs the same calls to completion for synchronous callers.

mod blocking;
mod lookup_client;
pub(crate) mod response;
mod types;
pub(crate) mod url;

pub use blocking::BlockingLookupClient;
pub use lookup_client::LookupClient;
pub use response::{FromLoose, LooseObject};
pub use types::{Producer, ServerInfo};
pub use url::build_url;
