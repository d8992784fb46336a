//! Per-call channel establishment for the veilfs state channel

use crate::config::NotifierConfig;
use crate::error::NotifyError;
use std::time::Duration;
use tonic::transport::{Channel, Endpoint};
use tracing::debug;

/// Opens one channel to the daemon per logical operation.
///
/// The handle is scoped to a single call: the dispatcher drops it on every
/// exit path, so no connection outlives the operation that opened it.
#[derive(Debug, Clone)]
pub struct ChannelManager {
    endpoint: String,
    connect_timeout: Duration,
}

impl ChannelManager {
    pub fn new(config: &NotifierConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            connect_timeout: config.connect_timeout,
        }
    }

    /// Establishes a fresh, ready-to-use channel to the daemon.
    ///
    /// The connection is plaintext — the daemon only listens on a local
    /// address. Any failure maps to [`NotifyError::Connection`]; a handle is
    /// only ever returned fully connected.
    // TODO: secure the channel with TLS once the daemon grows a server cert.
    pub async fn open(&self) -> Result<Channel, NotifyError> {
        debug!(endpoint = %self.endpoint, "opening veilfs state channel");

        let endpoint = Endpoint::from_shared(self.endpoint.clone())
            .map_err(|source| self.connection_error(source))?
            .connect_timeout(self.connect_timeout);

        endpoint
            .connect()
            .await
            .map_err(|source| self.connection_error(source))
    }

    fn connection_error(&self, source: tonic::transport::Error) -> NotifyError {
        NotifyError::Connection {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn malformed_endpoint_is_a_connection_error() {
        let manager = ChannelManager::new(&NotifierConfig::for_endpoint("not a uri"));

        let err = manager.open().await.unwrap_err();
        assert!(matches!(err, NotifyError::Connection { .. }));
    }
}
