//! Role capability matrix.
//!
//! Static `Role x Resource x Action -> bool` table consulted before every
//! mutating operation. All data is `const`; lookups are pure.

pub mod error;
pub mod matrix;
pub mod resource;
pub mod role;

pub use error::PolicyError;
pub use matrix::{allows, can, can_str, privileges, require};
pub use resource::{Action, CasePrivileges, Crud, DocumentPrivileges, Resource, ResourcePrivileges};
pub use role::Role;
