//! User module - Accounts, credentials and body metrics.

mod account;
mod credentials;
mod errors;

pub use account::{BodyMetrics, User, METRIC_UPPER_BOUND};
pub use credentials::{Email, Password, MIN_PASSWORD_LENGTH};
pub use errors::UserError;
