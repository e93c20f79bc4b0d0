use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CaseStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaseEventKind {
    StatusChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub from: CaseStatus,
    pub to: CaseStatus,
}

/// Domain event appended to the case log after an accepted change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseEvent {
    pub id: Uuid,
    pub org_id: Uuid,
    pub case_id: Uuid,
    pub actor_membership_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub kind: CaseEventKind,
    pub payload: StatusChange,
    pub created_at: DateTime<Utc>,
}

impl CaseEvent {
    pub fn status_change(
        org_id: Uuid,
        case_id: Uuid,
        actor_membership_id: Option<Uuid>,
        from: CaseStatus,
        to: CaseStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            org_id,
            case_id,
            actor_membership_id,
            kind: CaseEventKind::StatusChange,
            payload: StatusChange { from, to },
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_change_wire_shape() {
        let org = Uuid::new_v4();
        let case = Uuid::new_v4();
        let event = CaseEvent::status_change(
            org,
            case,
            None,
            CaseStatus::Assigned,
            CaseStatus::InProgress,
        );

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "STATUS_CHANGE");
        assert_eq!(json["payload"]["from"], "ASSIGNED");
        assert_eq!(json["payload"]["to"], "IN_PROGRESS");
        assert_eq!(json["case_id"], case.to_string());
        assert!(json["actor_membership_id"].is_null());
    }

    #[test]
    fn test_events_get_distinct_ids() {
        let org = Uuid::new_v4();
        let case = Uuid::new_v4();
        let a = CaseEvent::status_change(org, case, None, CaseStatus::New, CaseStatus::Screening);
        let b = CaseEvent::status_change(org, case, None, CaseStatus::New, CaseStatus::Screening);
        assert_ne!(a.id, b.id);
    }
}
