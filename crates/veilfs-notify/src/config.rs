//! Configuration for the veilfs state-channel client

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Well-known local address the veilfs daemon listens on.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:50871";

/// Bound on a single state-channel call, measured from just before dispatch.
/// Registration sits on the container-creation path, so this caps the worst
/// case added to boot time.
pub const DEFAULT_RPC_DEADLINE: Duration = Duration::from_secs(3);

/// Bound on establishing the channel itself.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

/// Connection settings for the veilfs state channel.
///
/// The endpoint is a plain configuration value rather than a baked-in
/// constant so callers (and tests) can aim the notifier at any daemon
/// instance. `Default` yields the well-known local address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// Address of the veilfs daemon (e.g., "http://127.0.0.1:50871")
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Deadline for one call; an elapsed deadline abandons the call
    #[serde(default = "default_rpc_deadline")]
    pub rpc_deadline: Duration,

    /// Timeout for opening the channel
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: Duration,
}

impl NotifierConfig {
    /// Configuration for a daemon at a non-default address, with the stock
    /// deadlines.
    pub fn for_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            rpc_deadline: default_rpc_deadline(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_rpc_deadline() -> Duration {
    DEFAULT_RPC_DEADLINE
}

fn default_connect_timeout() -> Duration {
    DEFAULT_CONNECT_TIMEOUT
}
