//! `SQLite` storage for the RemoteUAC daemon.
//!
//! Provides persistence for install requests.

mod db;
mod models;
mod queries;

#[cfg(test)]
mod tests;

pub use db::{Database, DatabaseError};
pub use models::{InstallRequestRow, NewInstallRequest};
