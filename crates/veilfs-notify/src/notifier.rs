//! Dispatch of container lifecycle notifications to the veilfs daemon

use crate::channel::ChannelManager;
use crate::config::NotifierConfig;
use crate::convert::{to_wire, ContainerMetadata};
use crate::error::NotifyError;
use std::future::Future;
use tokio::time::timeout;
use tonic::transport::Channel;
use tonic::{Response, Status};
use tracing::{debug, warn};
use veilfs_proto::container_state_channel_client::ContainerStateChannelClient;
use veilfs_proto::{Ack, ContainerState};

/// Client-side dispatcher for the three state-channel operations.
///
/// Each call opens its own channel, issues exactly one unary RPC bounded by
/// the configured deadline, and drops the channel before returning. Failures
/// are classified and surfaced, never retried — the caller decides whether a
/// failed notification is fatal to its own operation.
///
/// The notifier keeps no state between calls, so a single instance can be
/// shared freely across tasks.
pub struct Notifier {
    config: NotifierConfig,
    channel: ChannelManager,
}

impl Notifier {
    pub fn new(config: NotifierConfig) -> Self {
        let channel = ChannelManager::new(&config);
        Self { config, channel }
    }

    /// Registers a newly created container with the daemon.
    ///
    /// Blocking in intent: the creation hook must know registration
    /// succeeded before letting the container proceed, at the cost of up to
    /// one deadline of added boot latency.
    pub async fn register_container(&self, meta: &ContainerMetadata) -> Result<(), NotifyError> {
        self.dispatch("ContainerRegistration", meta, |mut client, state| async move {
            client.container_registration(state).await
        })
        .await
    }

    /// Removes a previously registered container from the daemon.
    pub async fn unregister_container(&self, meta: &ContainerMetadata) -> Result<(), NotifyError> {
        self.dispatch("ContainerUnregistration", meta, |mut client, state| async move {
            client.container_unregistration(state).await
        })
        .await
    }

    /// Pushes refreshed metadata for an already-registered container.
    ///
    /// The request carries the full record, but `ctime` is the only field
    /// the daemon is known to honor today.
    pub async fn update_container(&self, meta: &ContainerMetadata) -> Result<(), NotifyError> {
        self.dispatch("ContainerUpdate", meta, |mut client, state| async move {
            client.container_update(state).await
        })
        .await
    }

    /// Shared call sequence: open a channel, convert the record, issue the
    /// bounded unary call. The channel is dropped on every path out of here.
    async fn dispatch<F, Fut>(
        &self,
        op: &'static str,
        meta: &ContainerMetadata,
        call: F,
    ) -> Result<(), NotifyError>
    where
        F: FnOnce(ContainerStateChannelClient<Channel>, ContainerState) -> Fut,
        Fut: Future<Output = Result<Response<Ack>, Status>>,
    {
        let channel = self.channel.open().await?;
        let state = to_wire(meta)?;

        debug!(container = %meta.id, op, "dispatching state-channel call");

        let client = ContainerStateChannelClient::new(channel);

        match timeout(self.config.rpc_deadline, call(client, state)).await {
            Ok(Ok(_ack)) => {
                debug!(container = %meta.id, op, "daemon acknowledged");
                Ok(())
            }
            Ok(Err(status)) => {
                warn!(container = %meta.id, op, %status, "state-channel call failed");
                Err(NotifyError::Rpc { op, source: status })
            }
            Err(_elapsed) => {
                warn!(
                    container = %meta.id,
                    op,
                    deadline = ?self.config.rpc_deadline,
                    "state-channel call timed out"
                );
                Err(NotifyError::Rpc {
                    op,
                    source: Status::deadline_exceeded(format!(
                        "no response within {:?}",
                        self.config.rpc_deadline
                    )),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifier_is_send_sync() {
        // Compile-time check: concurrent callers need no coordination
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Notifier>();
    }
}
