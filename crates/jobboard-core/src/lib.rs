//! Service plumbing shared by the job board API.
//!
//! Error rendering, health checks, request-id and tracing setup, env config.

pub mod config;
pub mod error;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
