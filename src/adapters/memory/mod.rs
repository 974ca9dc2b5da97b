//! In-memory adapters.
//!
//! `InMemoryStore` implements every persistence port against one shared
//! state, so the full HTTP stack can run without PostgreSQL in tests and
//! local development.

mod store;

pub use store::InMemoryStore;
