use axum::extract::{rejection::QueryRejection, Query};
use serde::{Deserialize, Serialize};

use crate::handlers::utils::query_params;
use crate::middleware::{ApiResponse, ApiResult};
use crate::rbac::{self, Resource, Role};

#[derive(Debug, Deserialize)]
pub struct CanQuery {
    pub role: String,
    pub resource: String,
    pub action: String,
}

#[derive(Debug, Serialize)]
pub struct CanResponse {
    pub role: Role,
    pub resource: Resource,
    pub action: String,
    pub allowed: bool,
}

/// GET /api/policy/can?role=&resource=&action=
///
/// A denial is a 200 with `allowed: false`; only malformed identifiers fail.
pub async fn get(query: Result<Query<CanQuery>, QueryRejection>) -> ApiResult<CanResponse> {
    let query = query_params(query)?;
    let role: Role = query.role.parse()?;
    let resource: Resource = query.resource.parse()?;
    let allowed = rbac::can(role, resource, &query.action)?;

    Ok(ApiResponse::success(CanResponse {
        role,
        resource,
        action: query.action.to_ascii_lowercase(),
        allowed,
    }))
}
