use serde::Serialize;

use super::CaseStatus;
use crate::rbac::{PolicyError, Role};

/// Minimum tier a structurally valid edge demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeTier {
    ManagerPlus,
    OperatorOrAbove,
}

impl EdgeTier {
    pub fn min_role(&self) -> Role {
        match self {
            EdgeTier::ManagerPlus => Role::Manager,
            EdgeTier::OperatorOrAbove => Role::Operator,
        }
    }
}

/// Structural successors of `from`, in declared order.
pub fn successors(from: CaseStatus) -> &'static [CaseStatus] {
    use CaseStatus::*;

    match from {
        New => &[Screening],
        Screening => &[Approved, Rejected],
        Approved => &[Assigned],
        Assigned => &[DocsRequested, InProgress],
        DocsRequested => &[InProgress],
        InProgress => &[DocsRequested, Submitted],
        Submitted => &[Funded, ClosedLost],
        Rejected | Funded | ClosedLost => &[],
    }
}

pub fn is_edge(from: CaseStatus, to: CaseStatus) -> bool {
    successors(from).contains(&to)
}

/// Tier of the edge `from -> to`.
///
/// The operator edges today are the docs loop (`ASSIGNED -> DOCS_REQUESTED`,
/// `ASSIGNED -> IN_PROGRESS`, `DOCS_REQUESTED <-> IN_PROGRESS`). Anything not
/// named as manager-plus falls to operator-or-above.
pub fn classify(from: CaseStatus, to: CaseStatus) -> EdgeTier {
    use CaseStatus::*;

    match (from, to) {
        (New, Screening)
        | (Screening, Approved)
        | (Screening, Rejected)
        | (Approved, Assigned)
        | (InProgress, Submitted)
        | (Submitted, Funded)
        | (Submitted, ClosedLost) => EdgeTier::ManagerPlus,
        _ => EdgeTier::OperatorOrAbove,
    }
}

pub fn can_transition(role: Role, from: CaseStatus, to: CaseStatus) -> bool {
    if from == to || !is_edge(from, to) {
        return false;
    }
    match role {
        Role::Viewer => false,
        Role::Admin => true,
        _ => role >= classify(from, to).min_role(),
    }
}

pub fn assert_transition(role: Role, from: CaseStatus, to: CaseStatus) -> Result<(), PolicyError> {
    if can_transition(role, from, to) {
        Ok(())
    } else {
        tracing::debug!("Transition rejected: role={} {} -> {}", role, from, to);
        Err(PolicyError::TransitionForbidden { role, from, to })
    }
}

/// A structural edge with its tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: CaseStatus,
    pub to: CaseStatus,
    pub tier: EdgeTier,
}

/// Every edge of the case graph, grouped by source status in declaration order.
pub fn edges() -> Vec<Edge> {
    CaseStatus::ALL
        .into_iter()
        .flat_map(|from| {
            successors(from).iter().map(move |to| Edge {
                from,
                to: *to,
                tier: classify(from, *to),
            })
        })
        .collect()
}

/// Statuses `role` may move a case to from `from`.
pub fn legal_next_statuses(role: Role, from: CaseStatus) -> Vec<CaseStatus> {
    successors(from)
        .iter()
        .copied()
        .filter(|to| can_transition(role, from, *to))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{structural_edges, EXPECTED_SUCCESSORS};
    use crate::workflow::CaseStatus::*;

    #[test]
    fn test_no_op_is_rejected() {
        for role in Role::ALL {
            for status in CaseStatus::ALL {
                assert!(!can_transition(role, status, status));
            }
        }
    }

    #[test]
    fn test_terminal_states_have_no_exit() {
        for role in Role::ALL {
            for from in [Rejected, Funded, ClosedLost] {
                for to in CaseStatus::ALL {
                    assert!(!can_transition(role, from, to), "{} {} -> {}", role, from, to);
                }
                assert!(legal_next_statuses(role, from).is_empty());
            }
        }
    }

    #[test]
    fn test_successors_match_expected_table() {
        let covered: Vec<CaseStatus> = EXPECTED_SUCCESSORS.iter().map(|(from, _)| *from).collect();
        assert_eq!(covered, CaseStatus::ALL.to_vec());

        for (from, expected) in EXPECTED_SUCCESSORS {
            assert_eq!(successors(from), expected, "successors of {}", from);
        }
    }

    #[test]
    fn test_edges_follow_successor_order() {
        let listed: Vec<(CaseStatus, CaseStatus)> = edges().into_iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(listed, structural_edges());
    }

    #[test]
    fn test_viewer_never_transitions() {
        for (from, to) in structural_edges() {
            assert!(!can_transition(Role::Viewer, from, to));
        }
    }

    #[test]
    fn test_admin_takes_every_structural_edge() {
        let edges = structural_edges();
        assert_eq!(edges.len(), 11);
        for (from, to) in edges {
            assert!(can_transition(Role::Admin, from, to), "{} -> {}", from, to);
        }
    }

    #[test]
    fn test_nobody_skips_states() {
        for role in Role::ALL {
            for from in CaseStatus::ALL {
                for to in CaseStatus::ALL {
                    if !is_edge(from, to) {
                        assert!(!can_transition(role, from, to));
                    }
                }
            }
        }
    }

    #[test]
    fn test_no_edge_returns_to_new() {
        for (_, to) in structural_edges() {
            assert_ne!(to, New);
        }
    }

    #[test]
    fn test_legal_next_statuses_matches_can_transition() {
        for role in Role::ALL {
            for from in CaseStatus::ALL {
                let expected: Vec<_> = CaseStatus::ALL
                    .into_iter()
                    .filter(|to| can_transition(role, from, *to))
                    .collect();
                let mut got = legal_next_statuses(role, from);
                // same set, and adjacency order preserved
                let in_order: Vec<_> = successors(from)
                    .iter()
                    .copied()
                    .filter(|to| got.contains(to))
                    .collect();
                assert_eq!(got, in_order);
                got.sort_by_key(|s| s.as_str());
                let mut expected = expected;
                expected.sort_by_key(|s| s.as_str());
                assert_eq!(got, expected, "{} from {}", role, from);
            }
        }
    }

    #[test]
    fn test_legal_next_statuses_is_restartable() {
        let first = legal_next_statuses(Role::Operator, InProgress);
        let second = legal_next_statuses(Role::Operator, InProgress);
        assert_eq!(first, vec![DocsRequested]);
        assert_eq!(first, second);
        assert_eq!(legal_next_statuses(Role::Manager, InProgress), vec![DocsRequested, Submitted]);
        assert_eq!(legal_next_statuses(Role::Admin, Screening), vec![Approved, Rejected]);
    }

    #[test]
    fn test_operator_docs_loop() {
        assert!(can_transition(Role::Operator, Assigned, DocsRequested));
        assert!(can_transition(Role::Operator, Assigned, InProgress));
        assert!(can_transition(Role::Operator, DocsRequested, InProgress));
        assert!(can_transition(Role::Operator, InProgress, DocsRequested));
        assert_eq!(classify(InProgress, DocsRequested), EdgeTier::OperatorOrAbove);
        assert_eq!(classify(DocsRequested, InProgress), EdgeTier::OperatorOrAbove);
    }

    #[test]
    fn test_operator_cannot_approve_assign_submit_or_finalize() {
        for (from, to) in [
            (New, Screening),
            (Screening, Approved),
            (Screening, Rejected),
            (Approved, Assigned),
            (InProgress, Submitted),
            (Submitted, Funded),
            (Submitted, ClosedLost),
        ] {
            assert_eq!(classify(from, to), EdgeTier::ManagerPlus);
            assert!(!can_transition(Role::Operator, from, to));
            assert!(can_transition(Role::Manager, from, to));
        }
    }

    #[test]
    fn test_unlisted_pair_defaults_to_operator_tier() {
        assert_eq!(classify(New, Funded), EdgeTier::OperatorOrAbove);
        assert_eq!(EdgeTier::OperatorOrAbove.min_role(), Role::Operator);
    }

    #[test]
    fn test_concrete_scenarios() {
        assert!(!can_transition(Role::Viewer, New, Screening));
        assert!(can_transition(Role::Operator, Assigned, DocsRequested));
        assert!(!can_transition(Role::Operator, Screening, Approved));
        assert!(can_transition(Role::Manager, Submitted, Funded));
        assert!(!can_transition(Role::Manager, DocsRequested, Submitted));
        assert!(!can_transition(Role::Admin, New, Approved));
    }

    #[test]
    fn test_assert_transition() {
        assert_eq!(assert_transition(Role::Manager, Screening, Approved), Ok(()));
        let err = assert_transition(Role::Viewer, DocsRequested, InProgress).unwrap_err();
        assert_eq!(
            err,
            PolicyError::TransitionForbidden {
                role: Role::Viewer,
                from: DocsRequested,
                to: InProgress,
            }
        );
        assert_eq!(
            err.to_string(),
            "Transition not allowed: role=VIEWER DOCS_REQUESTED -> IN_PROGRESS"
        );
    }
}
