pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod rbac;
pub mod routes;
pub mod workflow;

#[cfg(test)]
pub mod testing;
