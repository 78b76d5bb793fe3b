//! Database queries for install requests.

use remoteuac_core::InstallStatus;
use remoteuac_core::db::unix_timestamp;

use super::db::{Database, DatabaseError};
use super::models::{InstallRequestRow, NewInstallRequest};

impl Database {
    /// Insert a new install request with status `pending` and a
    /// server-assigned creation time, returning the stored record.
    pub async fn create_install_request(
        &self,
        req: &NewInstallRequest,
    ) -> Result<InstallRequestRow, DatabaseError> {
        let now = unix_timestamp();

        let result = sqlx::query(
            r"
            INSERT INTO install_requests
                (device_id, app_name, size, path, download_source,
                 requested_changes, device_timestamp, status, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(&req.device_id)
        .bind(&req.app_name)
        .bind(&req.size)
        .bind(&req.path)
        .bind(&req.download_source)
        .bind(&req.requested_changes)
        .bind(req.device_timestamp)
        .bind(InstallStatus::Pending.as_str())
        .bind(now)
        .execute(self.pool())
        .await?;

        self.get_install_request(result.last_insert_rowid()).await
    }

    /// Get an install request by id.
    pub async fn get_install_request(&self, id: i64) -> Result<InstallRequestRow, DatabaseError> {
        sqlx::query_as::<_, InstallRequestRow>("SELECT * FROM install_requests WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?
            .ok_or_else(|| DatabaseError::NotFound(format!("Install request {id}")))
    }

    /// Atomically move a pending request to a terminal status.
    ///
    /// The `status = 'pending'` guard serializes concurrent decisions on the
    /// same id: exactly one update wins. Returns `false` when no pending row
    /// matched (already decided, or no such id; callers disambiguate with a
    /// follow-up read).
    pub async fn mark_decided(
        &self,
        id: i64,
        status: InstallStatus,
    ) -> Result<bool, DatabaseError> {
        let now = unix_timestamp();

        let result = sqlx::query(
            "UPDATE install_requests SET status = ?, decided_at = ? WHERE id = ? AND status = ?",
        )
        .bind(status.as_str())
        .bind(now)
        .bind(id)
        .bind(InstallStatus::Pending.as_str())
        .execute(self.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
