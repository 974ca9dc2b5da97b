//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod exercise;
pub mod ranking;
pub mod social;
pub mod user;
pub mod workout;
