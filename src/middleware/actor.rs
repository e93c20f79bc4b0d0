use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::rbac::{self, Action, Resource, Role};

pub const ORG_HEADER: &str = "x-org-id";
pub const ROLE_HEADER: &str = "x-actor-role";
pub const MEMBERSHIP_HEADER: &str = "x-membership-id";

/// Caller identity as resolved by the upstream session gateway.
///
/// The gateway validates the session and the membership; this service only
/// trusts the headers it forwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor {
    pub org_id: Uuid,
    pub role: Role,
    pub membership_id: Option<Uuid>,
}

impl Actor {
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, ApiError> {
        let org_id = header_str(headers, ORG_HEADER)
            .and_then(|v| Uuid::parse_str(v.trim()).ok())
            .ok_or_else(|| ApiError::org_header_invalid("Missing or invalid x-org-id"))?;

        let role = header_str(headers, ROLE_HEADER)
            .ok_or_else(|| ApiError::bad_request("Missing x-actor-role header"))?
            .trim()
            .parse::<Role>()?;

        let membership_id = match header_str(headers, MEMBERSHIP_HEADER) {
            Some(raw) => Some(Uuid::parse_str(raw.trim()).map_err(|_| {
                ApiError::invalid_field(MEMBERSHIP_HEADER, format!("Invalid UUID format: {}", raw))
            })?),
            None => None,
        };

        Ok(Self {
            org_id,
            role,
            membership_id,
        })
    }

    /// Guard for a generic mutation; `Forbidden` when the matrix says no.
    pub fn require(&self, resource: Resource, action: Action) -> Result<(), ApiError> {
        rbac::require(self.role, resource, action).map_err(ApiError::from)
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[async_trait]
impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let actor = Actor::from_headers(&parts.headers)?;
        tracing::debug!("Actor resolved: org={} role={}", actor.org_id, actor.role);
        Ok(actor)
    }
}
