use axum::extract::{rejection::JsonRejection, Path};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::handlers::utils::{json_body, parse_uuid};
use crate::middleware::{Actor, ApiResponse, ApiResult};
use crate::rbac::{Action, Resource};

#[derive(Debug, Deserialize)]
pub struct AssignRequest {
    pub assigned_to: String,
}

#[derive(Debug, Serialize)]
pub struct AssignAccepted {
    pub case_id: Uuid,
    pub org_id: Uuid,
    pub assigned_to: Uuid,
    pub assigned_by: Option<Uuid>,
}

/// POST /api/cases/:id/assign
pub async fn post(
    actor: Actor,
    Path(id): Path<String>,
    payload: Result<Json<AssignRequest>, JsonRejection>,
) -> ApiResult<AssignAccepted> {
    actor.require(Resource::Cases, Action::Assign)?;

    let case_id = parse_uuid("id", &id)?;
    let body = json_body(payload)?;
    let assigned_to = parse_uuid("assigned_to", &body.assigned_to)?;

    tracing::info!("Case {} assigned to membership {}", case_id, assigned_to);

    Ok(ApiResponse::success(AssignAccepted {
        case_id,
        org_id: actor.org_id,
        assigned_to,
        assigned_by: actor.membership_id,
    }))
}
