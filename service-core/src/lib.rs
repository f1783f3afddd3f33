//! service-core: Shared infrastructure for the relay workspace.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
