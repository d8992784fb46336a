//! Veilfs Notify: client-side lifecycle notifications for the veilfs daemon
//!
//! The veilfs daemon virtualizes portions of procfs and sysfs for system
//! containers. It learns about container lifecycle events from the runtime
//! through this crate: a thin gRPC adapter that registers, unregisters, and
//! updates container metadata over the daemon's local state channel.
//!
//! # Architecture
//!
//! - **ContainerMetadata / converters**: the in-memory record and its wire form
//! - **ChannelManager**: one plaintext channel per logical operation
//! - **Notifier**: the three unary calls, each bounded by a fixed deadline
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::SystemTime;
//! use veilfs_notify::{ContainerMetadata, Notifier, NotifierConfig};
//!
//! async fn example() -> Result<(), veilfs_notify::NotifyError> {
//!     let notifier = Notifier::new(NotifierConfig::default());
//!
//!     let meta = ContainerMetadata {
//!         id: "c1".to_string(),
//!         init_pid: 4242,
//!         hostname: "c1-host".to_string(),
//!         ctime: SystemTime::now(),
//!         uid_first: 100_000,
//!         uid_size: 65_536,
//!         gid_first: 100_000,
//!         gid_size: 65_536,
//!     };
//!
//!     notifier.register_container(&meta).await?;
//!     Ok(())
//! }
//! ```

pub mod channel;
pub mod config;
pub mod convert;
pub mod error;
pub mod notifier;

pub use channel::ChannelManager;
pub use config::NotifierConfig;
pub use convert::{from_wire, to_wire, ContainerMetadata};
pub use error::{NotifyError, Result, TimeConversionError};
pub use notifier::Notifier;
