//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Project storage (in-memory today, anything with CRUD tomorrow)
//! - Fuzzy matching (swap the scoring algorithm without touching search)
//! - Clock (for testing)

mod error;
mod repos;
mod search;
mod testing;

pub use error::RepoError;
pub use repos::ProjectRepo;
pub use search::{FuzzyMatcher, ScoredMatch, SearchDocument, SearchKey};
pub use testing::ClockPort;

#[cfg(test)]
pub use repos::MockProjectRepo;
#[cfg(test)]
pub use search::MockFuzzyMatcher;
#[cfg(test)]
pub use testing::MockClockPort;
