// handlers/mod.rs
//
// public  - no actor required (/, /health)
// policy  - read-only questions about the matrix and the case graph (/api/policy/*)
// cases   - decisions made on behalf of an actor (/api/cases/*, /api/authorize)

pub mod cases;
pub mod policy;
pub mod public;
pub mod utils;
