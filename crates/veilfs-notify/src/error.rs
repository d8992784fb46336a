//! Error types for the veilfs-notify crate

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NotifyError>;

/// Failure to move a container timestamp across the wire boundary.
///
/// The wire format bounds timestamps to years 0001-9999; anything outside
/// that range points at a bug in whoever constructed the record, not at a
/// transient condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeConversionError {
    #[error("timestamp {seconds}s since epoch is outside the representable range")]
    OutOfRange { seconds: i64 },

    #[error("wire record carries no timestamp")]
    Missing,
}

#[derive(Error, Debug)]
pub enum NotifyError {
    /// The state channel could not be established; the daemon should be
    /// treated as unavailable.
    #[error("failed to connect to veilfs at {endpoint}: {source}")]
    Connection {
        endpoint: String,
        #[source]
        source: tonic::transport::Error,
    },

    /// The record could not be converted to wire form; no call was attempted.
    #[error("container record conversion failed: {0}")]
    Serialization(#[from] TimeConversionError),

    /// The channel opened but the call failed or ran past its deadline.
    #[error("{op} call to veilfs failed: {source}")]
    Rpc {
        op: &'static str,
        #[source]
        source: tonic::Status,
    },
}
