//! JWT claims structure for RemoteUAC administrator credentials.

use serde::{Deserialize, Serialize};

/// Subject minted into administrator credentials.
pub const ADMIN_SUBJECT: &str = "admin_user";

/// Capability required to decide install requests.
pub const CAP_ADMIN: &str = "admin";

/// JWT claims embedded in credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// JWT ID (unique per token).
    pub jti: String,
    /// Subject (principal the credential was minted for).
    pub sub: String,
    /// Capabilities granted to the subject.
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// Issued at (unix timestamp).
    pub iat: i64,
    /// Expiration (unix timestamp).
    pub exp: i64,
}

impl Claims {
    /// Whether these claims authorize administrator operations.
    ///
    /// A capability-set check rather than subject equality, so additional
    /// roles extend without touching the verifier.
    pub fn is_admin(&self) -> bool {
        self.capabilities.iter().any(|c| c == CAP_ADMIN)
    }
}
