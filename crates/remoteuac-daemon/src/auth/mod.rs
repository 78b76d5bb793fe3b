//! Authentication module for the RemoteUAC backend.
//!
//! Provides JWT credential issuance and verification. The signing secret is
//! process-wide configuration, fixed at startup; it is the sole trust root.

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::TokenManager;
