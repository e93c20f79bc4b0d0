use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::rbac::PolicyError;

/// Lifecycle state of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaseStatus {
    New,
    Screening,
    Rejected,
    Approved,
    Assigned,
    DocsRequested,
    InProgress,
    Submitted,
    Funded,
    ClosedLost,
}

impl CaseStatus {
    pub const ALL: [CaseStatus; 10] = [
        CaseStatus::New,
        CaseStatus::Screening,
        CaseStatus::Rejected,
        CaseStatus::Approved,
        CaseStatus::Assigned,
        CaseStatus::DocsRequested,
        CaseStatus::InProgress,
        CaseStatus::Submitted,
        CaseStatus::Funded,
        CaseStatus::ClosedLost,
    ];

    pub const INITIAL: CaseStatus = CaseStatus::New;

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::New => "NEW",
            CaseStatus::Screening => "SCREENING",
            CaseStatus::Rejected => "REJECTED",
            CaseStatus::Approved => "APPROVED",
            CaseStatus::Assigned => "ASSIGNED",
            CaseStatus::DocsRequested => "DOCS_REQUESTED",
            CaseStatus::InProgress => "IN_PROGRESS",
            CaseStatus::Submitted => "SUBMITTED",
            CaseStatus::Funded => "FUNDED",
            CaseStatus::ClosedLost => "CLOSED_LOST",
        }
    }

    /// No outgoing edges for any role.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CaseStatus::Rejected | CaseStatus::Funded | CaseStatus::ClosedLost
        )
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStatus {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| PolicyError::UnknownStatus(s.to_string()))
    }
}
