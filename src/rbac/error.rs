use thiserror::Error;

use super::{Action, Resource, Role};
use crate::workflow::CaseStatus;

/// Failures raised by policy lookups.
///
/// The first four variants are integration errors: the caller passed an
/// identifier outside the closed sets. The last two are business denials.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    #[error("Unknown case status: {0}")]
    UnknownStatus(String),

    #[error("Action '{action}' is not defined for resource '{resource}'")]
    InvalidActionForResource { resource: Resource, action: String },

    #[error("Role {role} cannot {action} {resource}")]
    Denied {
        role: Role,
        resource: Resource,
        action: Action,
    },

    #[error("Transition not allowed: role={role} {from} -> {to}")]
    TransitionForbidden {
        role: Role,
        from: CaseStatus,
        to: CaseStatus,
    },
}

impl PolicyError {
    /// True for malformed input, false for a legitimate denial.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            PolicyError::UnknownRole(_)
                | PolicyError::UnknownResource(_)
                | PolicyError::UnknownStatus(_)
                | PolicyError::InvalidActionForResource { .. }
        )
    }
}
