//! RemoteUAC Daemon Library
//!
//! Core functionality for the RemoteUAC backend:
//! - JWT credential verification for administrator decisions
//! - SQLite storage for install requests
//! - Install request lifecycle engine
//! - gRPC server for device and administrator clients

pub mod auth;
pub mod lifecycle;
pub mod server;
pub mod storage;
