//! Auth types shared by the job board API and its tests.
//!
//! Provides the `sb_session` cookie builders, the demo identity extractor,
//! and the string formats of magic tokens and session ids.

pub mod cookie;
pub mod identity;
pub mod token;
