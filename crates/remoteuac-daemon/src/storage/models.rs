//! Database models for the RemoteUAC daemon.

use serde::{Deserialize, Serialize};

use remoteuac_core::InstallStatus;
use remoteuac_core::db::DatabaseError;

/// Install request record from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct InstallRequestRow {
    pub id: i64,
    pub device_id: String,
    pub app_name: String,
    pub size: String,
    pub path: String,
    pub download_source: String,
    /// Opaque JSON payload of requested system changes, stored verbatim.
    pub requested_changes: String,
    /// Device-reported creation time (unix seconds), hint only.
    pub device_timestamp: i64,
    pub status: String,
    /// Server-assigned creation time (unix seconds), authoritative.
    pub created_at: i64,
    pub decided_at: Option<i64>,
}

impl InstallRequestRow {
    /// Parse the stored status column.
    pub fn status(&self) -> Result<InstallStatus, DatabaseError> {
        self.status
            .parse()
            .map_err(|e: remoteuac_core::lifecycle::ParseStatusError| {
                DatabaseError::Query(e.to_string())
            })
    }
}

/// Parameters for inserting a new install request.
#[derive(Debug, Clone)]
pub struct NewInstallRequest {
    /// Identifier of the requesting device. Opaque, never validated.
    pub device_id: String,
    /// Executable name, e.g. "installer.exe".
    pub app_name: String,
    /// Human-readable artifact size.
    pub size: String,
    /// Install path on the device.
    pub path: String,
    /// Where the artifact was downloaded from.
    pub download_source: String,
    /// Opaque JSON payload of requested system changes, stored verbatim.
    pub requested_changes: String,
    /// Device-reported creation time (unix seconds).
    pub device_timestamp: i64,
}
