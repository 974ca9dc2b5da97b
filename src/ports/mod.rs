//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Write ports
//!
//! - `UserRepository` - Accounts and body metrics
//! - `ExerciseRepository` - Exercise reference data and seeding
//! - `WorkoutRepository` - Workout records, including the transactional replace
//! - `LikeRepository` - Likes on public records
//!
//! ## Read ports
//!
//! - `WorkoutReader` - Daily log, month calendar, per-exercise history
//! - `TimelineReader` - Public records of all users
//! - `SummaryReader` - Home screen totals
//! - `RankingReader` - Monthly leaderboards
//!
//! ## Auth ports
//!
//! - `SessionValidator` - Bearer token validation
//! - `TokenIssuer` - Token issuance on signup/login
//! - `PasswordHasher` - One-way password hashing

mod exercise_repository;
mod like_repository;
mod password_hasher;
mod ranking_reader;
mod session_validator;
mod summary_reader;
mod timeline_reader;
mod token_issuer;
mod user_repository;
mod workout_reader;
mod workout_repository;

pub use exercise_repository::ExerciseRepository;
pub use like_repository::LikeRepository;
pub use password_hasher::PasswordHasher;
pub use ranking_reader::RankingReader;
pub use session_validator::SessionValidator;
pub use summary_reader::{HomeSummaryView, SummaryReader};
pub use timeline_reader::{TimelineEntry, TimelineReader};
pub use token_issuer::TokenIssuer;
pub use user_repository::UserRepository;
pub use workout_reader::{DailyRecordView, ExerciseSetView, WorkoutReader};
pub use workout_repository::WorkoutRepository;
