//! Install request lifecycle engine.
//!
//! Drives the per-request state machine over the store and delegates
//! authorization of decisions to the token manager.

use std::sync::Arc;

use tracing::{info, warn};

use remoteuac_core::db::DatabaseError;

use crate::auth::TokenManager;
use crate::storage::{Database, InstallRequestRow, NewInstallRequest};

use super::types::LifecycleError;

/// Lifecycle manager for install requests.
///
/// Sole writer of request state. Reads are side-effect free; decisions are
/// serialized per id by the store's guarded update, so two concurrent
/// decisions on the same pending request cannot both win.
pub struct LifecycleEngine {
    db: Database,
    tokens: Arc<TokenManager>,
}

impl LifecycleEngine {
    /// Create a new lifecycle engine.
    pub fn new(db: Database, tokens: Arc<TokenManager>) -> Self {
        Self { db, tokens }
    }

    /// Create a new install request. Always starts `pending`.
    ///
    /// Caller-supplied fields are stored verbatim; the server-assigned
    /// creation time is authoritative.
    pub async fn create(
        &self,
        req: &NewInstallRequest,
    ) -> Result<InstallRequestRow, LifecycleError> {
        let row = self.db.create_install_request(req).await?;
        info!(
            id = row.id,
            device_id = %row.device_id,
            app_name = %row.app_name,
            "Install request created"
        );
        Ok(row)
    }

    /// Look up an install request by id. No side effects.
    pub async fn get_status(&self, id: i64) -> Result<InstallRequestRow, LifecycleError> {
        found(self.db.get_install_request(id).await, id)
    }

    /// Approve or deny a pending install request.
    ///
    /// Authorization is checked before the id is looked up, so an
    /// unauthorized caller cannot probe for valid ids. A decision on an
    /// already-terminal request fails with [`LifecycleError::AlreadyDecided`],
    /// uniformly, including for the loser of a concurrent race.
    pub async fn decide(
        &self,
        id: i64,
        approve: bool,
        credential: &str,
    ) -> Result<InstallRequestRow, LifecycleError> {
        if !self.tokens.authorize_admin(credential) {
            warn!(id, "Rejected decision with invalid credential");
            return Err(LifecycleError::Unauthorized);
        }

        let row = found(self.db.get_install_request(id).await, id)?;
        let current = row.status()?;
        let target = current
            .transition(approve)
            .map_err(|_| LifecycleError::AlreadyDecided { id, current })?;

        if self.db.mark_decided(id, target).await? {
            info!(id, status = %target, "Install request decided");
            return found(self.db.get_install_request(id).await, id);
        }

        // Lost a race: another decision landed between the read and the
        // guarded update. Report the terminal status that won.
        let row = found(self.db.get_install_request(id).await, id)?;
        Err(LifecycleError::AlreadyDecided {
            id,
            current: row.status()?,
        })
    }
}

/// Map a storage-level miss onto the lifecycle `NotFound`.
fn found(
    result: Result<InstallRequestRow, DatabaseError>,
    id: i64,
) -> Result<InstallRequestRow, LifecycleError> {
    match result {
        Ok(row) => Ok(row),
        Err(DatabaseError::NotFound(_)) => Err(LifecycleError::NotFound { id }),
        Err(e) => Err(LifecycleError::Storage(e)),
    }
}
