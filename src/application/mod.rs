//! Application layer - Commands, Queries, and Handlers.
//!
//! Handlers orchestrate domain operations and coordinate between ports.
//! Writes and reads are kept in separate handlers.

pub mod handlers;
