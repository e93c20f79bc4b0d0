use serde_json::json;

use crate::cli::utils::{output_rows, output_success};
use crate::cli::OutputFormat;
use crate::rbac::Role;
use crate::workflow::{self, CaseStatus, EdgeTier};

pub fn next(role: &str, status: &str, output_format: &OutputFormat) -> anyhow::Result<()> {
    let role: Role = role.parse()?;
    let from: CaseStatus = status.parse()?;
    let next = workflow::legal_next_statuses(role, from);

    let lines: Vec<String> = next.iter().map(|s| s.to_string()).collect();
    output_rows(output_format, "next", json!(next), &lines)
}

/// Errors with the forbidden-transition message so the process exits non-zero.
pub fn check(role: &str, from: &str, to: &str, output_format: &OutputFormat) -> anyhow::Result<()> {
    let role: Role = role.parse()?;
    let from: CaseStatus = from.parse()?;
    let to: CaseStatus = to.parse()?;

    workflow::assert_transition(role, from, to)?;

    output_success(
        output_format,
        &format!("{} may move a case {} -> {}", role, from, to),
        Some(json!({ "role": role, "from": from, "to": to, "tier": workflow::classify(from, to) })),
    )
}

pub fn graph(output_format: &OutputFormat) -> anyhow::Result<()> {
    let edges = workflow::edges();
    let lines: Vec<String> = edges
        .iter()
        .map(|edge| {
            let tier = match edge.tier {
                EdgeTier::ManagerPlus => "manager+",
                EdgeTier::OperatorOrAbove => "operator+",
            };
            format!("{:<15} -> {:<15} {}", edge.from.as_str(), edge.to.as_str(), tier)
        })
        .collect();

    output_rows(output_format, "edges", json!(edges), &lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_forbidden_is_an_error() {
        let err = check("MANAGER", "DOCS_REQUESTED", "SUBMITTED", &OutputFormat::Text).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Transition not allowed: role=MANAGER DOCS_REQUESTED -> SUBMITTED"
        );
        assert!(check("OPERATOR", "ASSIGNED", "DOCS_REQUESTED", &OutputFormat::Json).is_ok());
    }

    #[test]
    fn test_next_rejects_unknown_status() {
        let err = next("ADMIN", "ARCHIVED", &OutputFormat::Text).unwrap_err();
        assert_eq!(err.to_string(), "Unknown case status: ARCHIVED");
    }
}
