use axum::extract::Path;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::rbac::{self, ResourcePrivileges, Role};

#[derive(Debug, Serialize)]
pub struct RolePrivileges {
    pub role: Role,
    pub privileges: &'static ResourcePrivileges,
}

/// GET /api/policy/matrix - every role's privileges keyed by role
pub async fn get() -> ApiResult<Map<String, Value>> {
    let mut matrix = Map::new();
    for role in Role::ALL {
        let privileges = serde_json::to_value(rbac::privileges(role)).map_err(|e| {
            tracing::error!("Failed to serialize privileges for {}: {}", role, e);
            ApiError::internal_server_error("Failed to format capability matrix")
        })?;
        matrix.insert(role.as_str().to_string(), privileges);
    }
    Ok(ApiResponse::success(matrix))
}

/// GET /api/policy/matrix/:role
pub async fn role_get(Path(role): Path<String>) -> ApiResult<RolePrivileges> {
    let role: Role = role.parse()?;
    Ok(ApiResponse::success(RolePrivileges {
        role,
        privileges: rbac::privileges(role),
    }))
}
