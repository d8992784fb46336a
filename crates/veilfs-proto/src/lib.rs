/// Generated gRPC protocol definitions for the veilfs state channel.
///
/// This crate provides the protocol buffer definitions and generated code
/// for the lifecycle notifications a container runtime sends to the veilfs
/// daemon (registration, unregistration, update).
pub mod veilfs {
    pub mod v1 {
        tonic::include_proto!("veilfs.v1");
    }
}

// Re-export commonly used types for convenience
pub use veilfs::v1::*;
