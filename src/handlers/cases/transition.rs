use axum::extract::{rejection::JsonRejection, Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::handlers::utils::{json_body, parse_uuid};
use crate::middleware::{Actor, ApiResponse, ApiResult};
use crate::routes::AppState;
use crate::workflow::{self, CaseEvent, CaseStatus};

#[derive(Debug, Deserialize)]
pub struct TransitionRequest {
    pub from: String,
    pub to: String,
    /// Kinds of the case's documents currently in APPROVED state.
    #[serde(default)]
    pub approved_documents: Vec<String>,
    /// Organization override of the configured required kinds.
    pub required_documents: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct TransitionAccepted {
    pub case_id: Uuid,
    pub status: CaseStatus,
    pub event: CaseEvent,
}

/// POST /api/cases/:id/transition
///
/// Decides a status change for the calling actor. On acceptance the response
/// carries the new status and the event the caller must append.
pub async fn post(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<String>,
    payload: Result<Json<TransitionRequest>, JsonRejection>,
) -> ApiResult<TransitionAccepted> {
    let case_id = parse_uuid("id", &id)?;
    let body = json_body(payload)?;

    let from: CaseStatus = body.from.parse()?;
    let to: CaseStatus = body.to.parse()?;

    workflow::assert_transition(actor.role, from, to)?;

    let required = body
        .required_documents
        .unwrap_or_else(|| state.workflow.required_documents.clone());
    workflow::check_submission(to, &required, &body.approved_documents)?;

    let event = CaseEvent::status_change(actor.org_id, case_id, actor.membership_id, from, to);
    tracing::info!(
        "Case {} status {} -> {} accepted for role {} in org {}",
        case_id,
        from,
        to,
        actor.role,
        actor.org_id
    );

    Ok(ApiResponse::success(TransitionAccepted {
        case_id,
        status: to,
        event,
    }))
}
