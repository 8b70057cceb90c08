//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod naming;
pub mod search;

pub use naming::NamingUseCases;
pub use search::{SearchContext, SearchResults};
