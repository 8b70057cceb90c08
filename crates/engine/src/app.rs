//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::SystemClock,
    fuzzy::LevenshteinMatcher,
    memory::InMemoryProjectRepo,
    ports::{ClockPort, FuzzyMatcher, ProjectRepo, RepoError},
};
use crate::use_cases::naming::{CreateElement, GenerateDefaultName, NamingUseCases};
use crate::use_cases::SearchContext;

/// Main application state.
///
/// Owns the store and the single search context shared by every consumer.
pub struct App {
    pub projects: Arc<dyn ProjectRepo>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub naming: NamingUseCases,
    pub search: Arc<SearchContext>,
}

impl App {
    pub fn new(projects: Arc<dyn ProjectRepo>, matcher: Arc<dyn FuzzyMatcher>) -> Self {
        let naming = NamingUseCases::new(
            Arc::new(GenerateDefaultName::new(projects.clone())),
            Arc::new(CreateElement::new(projects.clone())),
        );
        let search = Arc::new(SearchContext::new(projects.clone(), matcher));

        Self {
            projects,
            use_cases: UseCases { naming, search },
        }
    }

    /// Builds the default stack: in-memory store, edit-distance matcher.
    ///
    /// The store is seeded from `snapshot` when given, otherwise starts empty.
    pub async fn in_memory(snapshot: Option<&std::path::Path>) -> Result<Self, RepoError> {
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
        let repo = match snapshot {
            Some(path) => InMemoryProjectRepo::from_json_file(path, clock).await?,
            None => InMemoryProjectRepo::new(clock),
        };
        Ok(Self::new(Arc::new(repo), Arc::new(LevenshteinMatcher::new())))
    }
}
