//! `RemoteUAC` Core Library
//!
//! Shared functionality for `RemoteUAC` components:
//! - Install request lifecycle state machine
//! - `SQLite` pool helpers and shared database types
//! - Tracing initialization

pub mod db;
pub mod lifecycle;
pub mod tracing_init;

pub use lifecycle::{InstallStatus, TransitionError};
