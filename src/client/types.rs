// Topology records returned by nsqlookupd

use super::response::{FromLoose, LooseObject};

/// One nsqd node advertising a topic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Producer {
    /// Address the producer registered from (`host:port` as seen by lookupd)
    pub remote_address: String,
    pub address: String,
    pub hostname: String,
    /// Address clients should connect to
    pub broadcast_address: String,
    pub tcp_port: i64,
    pub http_port: i64,
    pub version: String,
    /// Topics hosted by the node (`/nodes` only)
    pub topics: Vec<String>,
    /// Tombstone flag per entry of `topics` (`/nodes` only)
    pub tombstones: Vec<bool>,
}

impl Producer {
    /// `broadcast_address:tcp_port`, the address a consumer dials.
    pub fn tcp_address(&self) -> String {
        format!("{}:{}", self.broadcast_address, self.tcp_port)
    }

    /// `broadcast_address:http_port`, the node identifier the delete and
    /// tombstone endpoints expect.
    pub fn http_address(&self) -> String {
        format!("{}:{}", self.broadcast_address, self.http_port)
    }
}

impl FromLoose for Producer {
    fn from_loose(object: &LooseObject<'_>) -> Self {
        Producer {
            remote_address: object.string("remote_address"),
            address: object.string("address"),
            hostname: object.string("hostname"),
            broadcast_address: object.string("broadcast_address"),
            tcp_port: object.int("tcp_port"),
            http_port: object.int("http_port"),
            version: object.string("version"),
            topics: object.strings("topics"),
            tombstones: object.bools("tombstones"),
        }
    }
}

/// Version information of the queried daemon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerInfo {
    pub version: String,
}

impl FromLoose for ServerInfo {
    fn from_loose(object: &LooseObject<'_>) -> Self {
        ServerInfo {
            version: object.string("version"),
        }
    }
}
