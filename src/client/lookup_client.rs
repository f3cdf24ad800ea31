// nsqlookupd client implementation
//
// Async binding for the lookupd HTTP API. Each operation issues a single GET
// and maps the body into typed values. Nothing is cached or retried.

use std::time::Duration;

use reqwest::{Client, ClientBuilder, StatusCode};
use serde_json::{Map, Value};
use tracing::{debug, info, trace};

use super::response::{object_list, parse_data, string_list, FromLoose, LooseObject};
use super::types::{Producer, ServerInfo};
use super::url::build_url;
use crate::config::LookupConfig;
use crate::errors::LookupError;

const PING_PATH: &str = "/ping";
const LOOKUP_PATH: &str = "/lookup";
const TOPICS_PATH: &str = "/topics";
const CHANNELS_PATH: &str = "/channels";
const NODES_PATH: &str = "/nodes";
const DELETE_TOPIC_PATH: &str = "/delete_topic";
const DELETE_CHANNEL_PATH: &str = "/delete_channel";
const TOMBSTONE_PATH: &str = "/tombstone_topic_producer";
const INFO_PATH: &str = "/info";

/// Body nsqlookupd answers command endpoints with.
const OK_BODY: &str = "OK";

const USER_AGENT: &str = concat!("nsq-lookup/", env!("CARGO_PKG_VERSION"));

/// Status and full body of one lookupd response
struct RawResponse {
    url: String,
    status: StatusCode,
    body: String,
}

/// Async client for a single nsqlookupd instance.
///
/// Holds only the target address and a shared HTTP handle, so clones are
/// cheap and calls from many tasks can run concurrently.
#[derive(Debug, Clone)]
pub struct LookupClient {
    host: String,
    port: u16,
    timeout: Option<Duration>,
    /// Build failure is kept and reported by the first call
    http: Result<Client, String>,
}

impl Default for LookupClient {
    fn default() -> Self {
        Self::with_address("", 0)
    }
}

impl LookupClient {
    /// Client for `host`. The port must be set with [`LookupClient::port`]
    /// before any call.
    pub fn new(host: impl Into<String>) -> Self {
        Self::with_address(host, 0)
    }

    pub fn with_address(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: None,
            http: build_http_client(Client::builder().user_agent(USER_AGENT)),
        }
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &LookupConfig) -> Self {
        let mut client = Self::with_address(config.host.clone(), config.port);
        client.timeout = config.timeout_seconds.map(Duration::from_secs);
        info!(
            host = %client.host,
            port = client.port,
            timeout_seconds = ?config.timeout_seconds,
            "Created lookupd client from config"
        );
        client
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Copy of this client whose calls give up after `timeout`.
    ///
    /// The copy shares its connection pool with `self`.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self.clone()
        }
    }

    pub fn target_host(&self) -> &str {
        &self.host
    }

    pub fn target_port(&self) -> u16 {
        self.port
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Check that the daemon is up.
    ///
    /// Returns `Ok(false)` when the daemon answers with anything other than
    /// HTTP 200 and `OK`.
    pub async fn ping(&self) -> Result<bool, LookupError> {
        self.command(PING_PATH, &[]).await
    }

    /// Producers of `topic`.
    pub async fn producers_for_topic(&self, topic: &str) -> Result<Vec<Producer>, LookupError> {
        let (url, data) = self.get_data(LOOKUP_PATH, &[("topic", topic)]).await?;
        object_list(&url, &data, "producers")
    }

    /// All known topics, in the order the daemon lists them.
    pub async fn topics(&self) -> Result<Vec<String>, LookupError> {
        let (url, data) = self.get_data(TOPICS_PATH, &[]).await?;
        string_list(&url, &data, "topics")
    }

    /// Channels of `topic`.
    ///
    /// The topic is sent as the `topic` query parameter; nsqlookupd rejects
    /// `/channels` without it.
    pub async fn channels_for_topic(&self, topic: &str) -> Result<Vec<String>, LookupError> {
        let (url, data) = self.get_data(CHANNELS_PATH, &[("topic", topic)]).await?;
        string_list(&url, &data, "channels")
    }

    /// Every nsqd node registered with the daemon.
    pub async fn nodes(&self) -> Result<Vec<Producer>, LookupError> {
        let (url, data) = self.get_data(NODES_PATH, &[]).await?;
        object_list(&url, &data, "producers")
    }

    pub async fn delete_topic(&self, topic: &str) -> Result<bool, LookupError> {
        self.command(DELETE_TOPIC_PATH, &[("topic", topic)]).await
    }

    pub async fn delete_channel(&self, channel: &str, node: &str) -> Result<bool, LookupError> {
        self.command(DELETE_CHANNEL_PATH, &[("channel", channel), ("node", node)])
            .await
    }

    /// Tombstone `topic` on `node` (`broadcast_address:http_port`) so
    /// consumers stop discovering it there.
    pub async fn tombstone_producer(&self, topic: &str, node: &str) -> Result<bool, LookupError> {
        self.command(TOMBSTONE_PATH, &[("topic", topic), ("node", node)])
            .await
    }

    pub async fn info(&self) -> Result<ServerInfo, LookupError> {
        let (_, data) = self.get_data(INFO_PATH, &[]).await?;
        Ok(ServerInfo::from_loose(&LooseObject::new(&data)))
    }

    /// Command endpoints answer with a bare `OK`; the body is never parsed.
    async fn command(&self, path: &str, params: &[(&str, &str)]) -> Result<bool, LookupError> {
        let response = self.send(path, params).await?;
        let ok = response.status == StatusCode::OK && response.body.eq_ignore_ascii_case(OK_BODY);
        if !ok {
            debug!(
                url = %response.url,
                status = response.status.as_u16(),
                "Lookupd command not acknowledged"
            );
        }
        Ok(ok)
    }

    async fn get_data(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<(String, Map<String, Value>), LookupError> {
        let response = self.send(path, params).await?;

        if !response.status.is_success() {
            return Err(LookupError::Status {
                url: response.url,
                status: response.status.as_u16(),
                body: response.body,
            });
        }

        let data = parse_data(&response.url, &response.body)?;
        Ok((response.url, data))
    }

    async fn send(&self, path: &str, params: &[(&str, &str)]) -> Result<RawResponse, LookupError> {
        let url = build_url(&self.host, self.port, path, params)?;
        debug!(url = %url, "Sending lookupd request");

        let http = self
            .http
            .as_ref()
            .map_err(|reason| LookupError::configuration("http", reason.clone()))?;

        let mut request = http.get(&url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(source) => return Err(LookupError::Transport { url, source }),
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(source) => return Err(LookupError::Transport { url, source }),
        };

        debug!(url = %url, status = status.as_u16(), "Received lookupd response");
        trace!(body = %body, "Lookupd response body");

        Ok(RawResponse { url, status, body })
    }
}

fn build_http_client(builder: ClientBuilder) -> Result<Client, String> {
    builder
        .build()
        .map_err(|e| format!("failed to build HTTP client: {}", e))
}
