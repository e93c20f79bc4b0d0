use axum::response::Json;
use serde_json::{json, Value};

use crate::error::ApiError;

/// GET / - service description
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Casedesk API",
            "version": version,
            "description": "Role capability matrix and case status workflow",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "matrix": "/api/policy/matrix[/:role]",
                "can": "/api/policy/can?role=&resource=&action=",
                "graph": "/api/policy/graph",
                "transitions": "/api/policy/transitions/:from?role=",
                "authorize": "/api/authorize (actor headers)",
                "case_transition": "/api/cases/:id/transition (actor headers)",
                "case_assign": "/api/cases/:id/assign (actor headers)",
            },
            "actor_headers": ["x-org-id", "x-actor-role", "x-membership-id"]
        }
    }))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
        }
    }))
}

/// Router fallback
pub async fn not_found() -> ApiError {
    ApiError::not_found("Route not found")
}
