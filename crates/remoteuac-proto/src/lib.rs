//! RemoteUAC Protocol Buffers
//!
//! Generated protobuf code for the RemoteUAC gRPC API.
//!
//! This crate contains:
//! - `InstallRequestService` for install request submission and approval
//! - `Health` for liveness checks

#![allow(clippy::derive_partial_eq_without_eq)]

/// RemoteUAC v1 API definitions.
///
/// All generated types and services are included here.
pub mod v1 {
    tonic::include_proto!("remoteuac.v1");
}

// Re-export v1 as the default API version for convenience
pub use v1::*;
