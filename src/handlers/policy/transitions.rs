use axum::extract::{rejection::QueryRejection, Path, Query};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::handlers::utils::query_params;
use crate::middleware::{ApiResponse, ApiResult};
use crate::rbac::Role;
use crate::workflow::{self, CaseStatus, Edge};

#[derive(Debug, Deserialize)]
pub struct TransitionsQuery {
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NextStatuses {
    pub role: Role,
    pub from: CaseStatus,
    pub terminal: bool,
    pub next: Vec<CaseStatus>,
}

/// GET /api/policy/transitions/:from?role=
pub async fn get(
    Path(from): Path<String>,
    query: Result<Query<TransitionsQuery>, QueryRejection>,
) -> ApiResult<NextStatuses> {
    let query = query_params(query)?;
    let from: CaseStatus = from.parse()?;
    let role: Role = query
        .role
        .as_deref()
        .ok_or_else(|| ApiError::bad_request("Query parameter 'role' is required"))?
        .parse()?;

    Ok(ApiResponse::success(NextStatuses {
        role,
        from,
        terminal: from.is_terminal(),
        next: workflow::legal_next_statuses(role, from),
    }))
}

/// GET /api/policy/graph - structural edges with their tiers
pub async fn graph_get() -> ApiResult<Vec<Edge>> {
    Ok(ApiResponse::success(workflow::edges()))
}
