use thiserror::Error;

use super::CaseStatus;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("Missing approved documents: {}", .0.join(", "))]
    DocsRequiredMissing(Vec<String>),
}

/// Required document kinds with no approved document, in `required` order.
pub fn missing_documents(required: &[String], approved: &[String]) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();
    for kind in required {
        if !approved.contains(kind) && !missing.contains(kind) {
            missing.push(kind.clone());
        }
    }
    missing
}

/// Gate applied on top of the transition check when a case is submitted.
pub fn check_submission(
    to: CaseStatus,
    required: &[String],
    approved: &[String],
) -> Result<(), WorkflowError> {
    if to != CaseStatus::Submitted {
        return Ok(());
    }

    let missing = missing_documents(required, approved);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(WorkflowError::DocsRequiredMissing(missing))
    }
}
