//! Authentication adapters.
//!
//! - `jwt` - HS256 token issuance and validation
//! - `argon2_hasher` - Production password hashing
//! - `mock` - Token table and plaintext hasher for tests

mod argon2_hasher;
mod jwt;
mod mock;

pub use argon2_hasher::Argon2PasswordHasher;
pub use jwt::JwtAuthenticator;
pub use mock::{MockSessionValidator, PlaintextPasswordHasher};
