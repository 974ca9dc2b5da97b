//! Adapters - Implementations of port interfaces.
//!
//! - `auth` - JWT tokens, argon2 password hashing, test doubles
//! - `http` - axum routes, extractors and middleware
//! - `memory` - In-memory store implementing every persistence port
//! - `postgres` - sqlx/PostgreSQL persistence

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
