use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{self, AppConfig, WorkflowConfig};
use crate::handlers::{cases, policy, public};

/// Shared handler state, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub workflow: Arc<WorkflowConfig>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            workflow: Arc::new(config.workflow.clone()),
        }
    }
}

/// Full application router built from the global config.
pub fn app() -> Router {
    app_with(config::config())
}

pub fn app_with(config: &AppConfig) -> Router {
    let mut router = Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .merge(policy_routes())
        .merge(case_routes())
        .fallback(public::not_found)
        .with_state(AppState::new(config))
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    if config.security.enable_cors {
        router = router.layer(cors_layer(&config.security.cors_origins));
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

fn policy_routes() -> Router<AppState> {
    Router::new()
        .route("/api/policy/matrix", get(policy::matrix_get))
        .route("/api/policy/matrix/:role", get(policy::matrix_role_get))
        .route("/api/policy/can", get(policy::can_get))
        .route("/api/policy/graph", get(policy::graph_get))
        .route("/api/policy/transitions/:from", get(policy::transitions_get))
}

fn case_routes() -> Router<AppState> {
    Router::new()
        .route("/api/authorize", post(cases::authorize_post))
        .route("/api/cases/:id/transition", post(cases::transition_post))
        .route("/api/cases/:id/assign", post(cases::assign_post))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}
