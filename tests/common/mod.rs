// Shared helpers for lookupd client integration tests
#![allow(dead_code)]

use nsq_lookup::{LookupClient, LookupConfig};
use tracing_subscriber::EnvFilter;

pub const PRODUCER_ENVELOPE: &str = r#"{"data":{"producers":[{"address":"1.2.3.4","hostname":"h","broadcast_address":"b","tcp_port":4150,"http_port":4151,"version":"1.0"}]}}"#;

/// Route client logs to the test harness (RUST_LOG=nsq_lookup=debug to see them)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Lookupd config pointing at a mock server's `host:port`
pub fn config_for(host_with_port: &str) -> LookupConfig {
    LookupConfig::from_address(host_with_port).expect("mock server address")
}

pub fn client_for(host_with_port: &str) -> LookupClient {
    LookupClient::from_config(&config_for(host_with_port))
}

/// A local port nothing is listening on
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    listener.local_addr().expect("local addr").port()
}
