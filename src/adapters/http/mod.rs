//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own module (dto, handlers, routes) and `router`
//! assembles them behind the shared middleware stack.

pub mod error;
pub mod exercise;
pub mod middleware;
pub mod ranking;
pub mod router;
pub mod social;
pub mod user;
pub mod workout;

pub use error::ErrorResponse;
pub use router::{build_router, Ports, RouterSettings};
