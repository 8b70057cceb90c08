//! Search use cases - weighted fuzzy search over elements and projects.
//!
//! [`SearchContext`] is owned by the composition root and shared by whoever
//! renders search results. It remembers the current query so callers can
//! search without passing one, and rebuilds its candidate documents on every
//! call; nothing is indexed between calls.

use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;
use worldcodex_domain::{Project, WorldElement};

use crate::infrastructure::ports::{
    FuzzyMatcher, ProjectRepo, RepoError, SearchDocument, SearchKey,
};

mod documents;

pub use documents::{
    element_document, project_document, ELEMENT_SEARCH_KEYS, PROJECT_SEARCH_KEYS,
    SEARCH_THRESHOLD,
};

/// Results of searching every project and every element they own.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub elements: Vec<WorldElement>,
    pub projects: Vec<Project>,
}

pub struct SearchContext {
    query: RwLock<String>,
    matcher: Arc<dyn FuzzyMatcher>,
    projects: Arc<dyn ProjectRepo>,
}

impl SearchContext {
    pub fn new(projects: Arc<dyn ProjectRepo>, matcher: Arc<dyn FuzzyMatcher>) -> Self {
        Self {
            query: RwLock::new(String::new()),
            matcher,
            projects,
        }
    }

    /// Replaces the current query. Does not run a search.
    pub fn set_query(&self, query: impl Into<String>) {
        *self.query.write().unwrap_or_else(PoisonError::into_inner) = query.into();
    }

    pub fn query(&self) -> String {
        self.query
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Elements matching `query` (or the current query when `None`), best first.
    ///
    /// A blank query returns every element in input order.
    pub fn search_elements<'a>(
        &self,
        elements: &'a [WorldElement],
        query: Option<&str>,
    ) -> Vec<&'a WorldElement> {
        match self.ranked_indices(elements, query, &ELEMENT_SEARCH_KEYS, element_document) {
            Some(indices) => indices.into_iter().map(|i| &elements[i]).collect(),
            None => elements.iter().collect(),
        }
    }

    /// Projects matching `query` (or the current query when `None`), best first.
    ///
    /// A blank query returns every project in input order.
    pub fn search_projects<'a>(
        &self,
        projects: &'a [Project],
        query: Option<&str>,
    ) -> Vec<&'a Project> {
        match self.ranked_indices(projects, query, &PROJECT_SEARCH_KEYS, project_document) {
            Some(indices) => indices.into_iter().map(|i| &projects[i]).collect(),
            None => projects.iter().collect(),
        }
    }

    /// Searches every project in the store, and every element they own, with
    /// the current query.
    pub async fn search_all(&self) -> Result<SearchResults, RepoError> {
        let projects = self.projects.list_projects().await?;
        let elements: Vec<WorldElement> = projects
            .iter()
            .flat_map(|p| p.elements().iter().cloned())
            .collect();

        let results = SearchResults {
            elements: self.search_elements(&elements, None).into_iter().cloned().collect(),
            projects: self.search_projects(&projects, None).into_iter().cloned().collect(),
        };
        tracing::debug!(
            elements = results.elements.len(),
            projects = results.projects.len(),
            "Search completed"
        );
        Ok(results)
    }

    /// `None` means the query was blank and the input passes through untouched.
    fn ranked_indices<T>(
        &self,
        items: &[T],
        query: Option<&str>,
        keys: &[SearchKey],
        to_document: impl Fn(&T) -> SearchDocument,
    ) -> Option<Vec<usize>> {
        let query = match query {
            Some(q) => q.to_string(),
            None => self.query(),
        };
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let documents: Vec<SearchDocument> = items.iter().map(to_document).collect();
        let matches = self
            .matcher
            .score_candidates(&documents, query, keys, SEARCH_THRESHOLD);
        Some(
            matches
                .into_iter()
                .map(|m| m.index)
                .filter(|&i| i < items.len())
                .collect(),
        )
    }
}
