//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, months, errors)
//! - `user` - Accounts, credentials and body metrics
//! - `exercise` - Exercise reference data
//! - `workout` - Workout record aggregate and set validation
//! - `social` - Like rules for public records
//! - `ranking` - Monthly rankings and snapshot freshness

pub mod exercise;
pub mod foundation;
pub mod ranking;
pub mod social;
pub mod user;
pub mod workout;
