//! Lifecycle engine types.

use remoteuac_core::InstallStatus;
use remoteuac_core::db::DatabaseError;

/// Lifecycle engine errors.
///
/// Every failure is terminal for the operation that raised it; there are no
/// retries and no partial effects.
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    /// No install request with the given id exists.
    #[error("Install request not found: {id}")]
    NotFound { id: i64 },

    /// The presented credential does not authorize administrator
    /// operations. Deliberately carries no detail: malformed, expired, and
    /// wrong-principal credentials are indistinguishable to the caller.
    #[error("Unauthorized")]
    Unauthorized,

    /// The request already carries a terminal status; decisions apply
    /// exactly once.
    #[error("Install request {id} already {current}")]
    AlreadyDecided { id: i64, current: InstallStatus },

    /// The underlying store failed.
    #[error("Storage error: {0}")]
    Storage(#[from] DatabaseError),
}
