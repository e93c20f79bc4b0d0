use uuid::Uuid;

use crate::middleware::Actor;
use crate::rbac::Role;
use crate::workflow::CaseStatus::{self, *};

/// Expected adjacency, written out by hand. Order within a row is significant.
pub const EXPECTED_SUCCESSORS: [(CaseStatus, &[CaseStatus]); 10] = [
    (New, &[Screening]),
    (Screening, &[Approved, Rejected]),
    (Rejected, &[]),
    (Approved, &[Assigned]),
    (Assigned, &[DocsRequested, InProgress]),
    (DocsRequested, &[InProgress]),
    (InProgress, &[DocsRequested, Submitted]),
    (Submitted, &[Funded, ClosedLost]),
    (Funded, &[]),
    (ClosedLost, &[]),
];

/// Every `(from, to)` pair of the expected graph, in adjacency order.
pub fn structural_edges() -> Vec<(CaseStatus, CaseStatus)> {
    EXPECTED_SUCCESSORS
        .iter()
        .flat_map(|(from, tos)| tos.iter().map(move |to| (*from, *to)))
        .collect()
}

/// Actor in a fresh organization with no membership id.
pub fn actor(role: Role) -> Actor {
    Actor {
        org_id: Uuid::new_v4(),
        role,
        membership_id: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_edges_cover_graph() {
        let edges = structural_edges();
        assert_eq!(edges.len(), 11);
        assert_eq!(edges.first(), Some(&(New, Screening)));
        assert!(edges.contains(&(InProgress, DocsRequested)));
        assert!(edges.contains(&(DocsRequested, InProgress)));
        assert!(edges.iter().all(|(from, _)| !from.is_terminal()));
    }

    #[test]
    fn test_actors_live_in_distinct_orgs() {
        assert_ne!(actor(Role::Viewer).org_id, actor(Role::Viewer).org_id);
    }
}
