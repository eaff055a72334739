//! Test utilities for the job board API.
//!
//! Provides `DemoAuth` header builders and the golden-file fixture loader.
//! Import from dev-dependencies only, never in production code.

pub mod auth;
pub mod fixture;
