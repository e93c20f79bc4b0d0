//! Case status transition engine.
//!
//! A transition is legal only when it is a structural edge of the case graph
//! and the actor's role meets the edge's tier.

pub mod event;
pub mod status;
pub mod submission;
pub mod transition;

pub use event::{CaseEvent, CaseEventKind, StatusChange};
pub use status::CaseStatus;
pub use submission::{check_submission, missing_documents, WorkflowError};
pub use transition::{
    assert_transition, can_transition, classify, edges, is_edge, legal_next_statuses, successors,
    Edge, EdgeTier,
};
