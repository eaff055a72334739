//! Domain types for the job board API.
//!
//! Pure types with no framework dependencies. Import in `usecase/` and
//! `domain/` layers; never depend on axum from here.

pub mod id;
pub mod provider;
pub mod role;
pub mod user;
