//! Install request lifecycle state machine.
//!
//! A request starts `Pending` and transitions exactly once to `Approved`
//! or `Denied`. No transition is defined out of a terminal state; a repeat
//! decision fails with [`TransitionError::AlreadyDecided`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle status of an install request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallStatus {
    /// Awaiting an administrator decision.
    Pending,
    /// Approved by an administrator. Terminal.
    Approved,
    /// Denied by an administrator. Terminal.
    Denied,
}

impl InstallStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Denied => "denied",
        }
    }

    /// Whether this status admits no further transition.
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Apply an administrator decision to this status.
    ///
    /// Only defined from `Pending`; a decision on a terminal status fails
    /// uniformly, regardless of whether it matches the recorded one.
    pub const fn transition(self, approve: bool) -> Result<Self, TransitionError> {
        match self {
            Self::Pending => Ok(if approve { Self::Approved } else { Self::Denied }),
            current => Err(TransitionError::AlreadyDecided { current }),
        }
    }
}

impl std::str::FromStr for InstallStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "denied" => Ok(Self::Denied),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

impl std::fmt::Display for InstallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for an undefined state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The request already carries a terminal status.
    #[error("Request already {current}")]
    AlreadyDecided {
        /// The recorded terminal status.
        current: InstallStatus,
    },
}

/// Error for an unknown status string in storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown install status: {0}")]
pub struct ParseStatusError(pub String);
