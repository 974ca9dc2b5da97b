//! User handlers.
//!
//! ## Commands
//! - Signup (register + first token)
//! - Login (verify + token)
//! - Update body metrics
//!
//! ## Queries
//! - Profile
//! - Home summary

mod get_home_summary;
mod get_profile;
mod login;
mod signup;
mod update_profile;

#[cfg(test)]
pub(crate) mod test_support;

// Commands
pub use login::{LoginCommand, LoginHandler};
pub use signup::{AuthResult, SignupCommand, SignupHandler};
pub use update_profile::{UpdateProfileCommand, UpdateProfileHandler};

// Queries
pub use get_home_summary::{GetHomeSummaryHandler, GetHomeSummaryQuery};
pub use get_profile::{GetProfileHandler, GetProfileQuery};
