use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::handlers::utils::json_body;
use crate::middleware::{Actor, ApiResponse, ApiResult};
use crate::rbac::{Action, PolicyError, Resource, Role};

#[derive(Debug, Deserialize)]
pub struct AuthorizeRequest {
    pub resource: String,
    pub action: String,
}

#[derive(Debug, Serialize)]
pub struct Authorized {
    pub role: Role,
    pub resource: Resource,
    pub action: Action,
    pub allowed: bool,
}

/// POST /api/authorize
///
/// Guard a CRUD handler calls before a generic mutation. Denials are 403s.
pub async fn post(
    actor: Actor,
    payload: Result<Json<AuthorizeRequest>, JsonRejection>,
) -> ApiResult<Authorized> {
    let body = json_body(payload)?;
    let resource: Resource = body.resource.parse()?;
    let action = Action::parse(&body.action).ok_or_else(|| PolicyError::InvalidActionForResource {
        resource,
        action: body.action.clone(),
    })?;

    actor.require(resource, action)?;

    Ok(ApiResponse::success(Authorized {
        role: actor.role,
        resource,
        action,
        allowed: true,
    }))
}
