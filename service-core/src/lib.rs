//! service-core: shared infrastructure for the price frontend.
pub mod config;
pub mod middleware;
pub mod observability;
