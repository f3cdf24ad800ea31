// Blocking adapter over LookupClient
//
// Runs each async operation to completion on a private current-thread
// runtime. Results and errors are exactly those of the async client.

use std::future::Future;
use std::time::Duration;

use tokio::runtime::{Builder, Runtime};

use super::lookup_client::LookupClient;
use super::types::{Producer, ServerInfo};
use crate::config::LookupConfig;
use crate::errors::LookupError;

/// Blocking twin of [`LookupClient`].
///
/// Must not be used from inside an async runtime: `block_on` panics when
/// called on a runtime worker thread. Use [`LookupClient`] there instead.
#[derive(Debug)]
pub struct BlockingLookupClient {
    inner: LookupClient,
    runtime: Runtime,
}

impl BlockingLookupClient {
    pub fn new(inner: LookupClient) -> Result<Self, LookupError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| LookupError::configuration("runtime", format!("failed to start: {}", e)))?;

        Ok(Self { inner, runtime })
    }

    pub fn with_address(host: impl Into<String>, port: u16) -> Result<Self, LookupError> {
        Self::new(LookupClient::with_address(host, port))
    }

    pub fn from_config(config: &LookupConfig) -> Result<Self, LookupError> {
        Self::new(LookupClient::from_config(config))
    }

    /// The async client every call is delegated to
    pub fn inner(&self) -> &LookupClient {
        &self.inner
    }

    /// Apply a per-call deadline to subsequent calls.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.inner = self.inner.with_timeout(timeout);
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    pub fn ping(&self) -> Result<bool, LookupError> {
        self.block_on(self.inner.ping())
    }

    pub fn producers_for_topic(&self, topic: &str) -> Result<Vec<Producer>, LookupError> {
        self.block_on(self.inner.producers_for_topic(topic))
    }

    pub fn topics(&self) -> Result<Vec<String>, LookupError> {
        self.block_on(self.inner.topics())
    }

    pub fn channels_for_topic(&self, topic: &str) -> Result<Vec<String>, LookupError> {
        self.block_on(self.inner.channels_for_topic(topic))
    }

    pub fn nodes(&self) -> Result<Vec<Producer>, LookupError> {
        self.block_on(self.inner.nodes())
    }

    pub fn delete_topic(&self, topic: &str) -> Result<bool, LookupError> {
        self.block_on(self.inner.delete_topic(topic))
    }

    pub fn delete_channel(&self, channel: &str, node: &str) -> Result<bool, LookupError> {
        self.block_on(self.inner.delete_channel(channel, node))
    }

    pub fn tombstone_producer(&self, topic: &str, node: &str) -> Result<bool, LookupError> {
        self.block_on(self.inner.tombstone_producer(topic, node))
    }

    pub fn info(&self) -> Result<ServerInfo, LookupError> {
        self.block_on(self.inner.info())
    }
}
