//! Fuzzy matching port.
//!
//! The search use cases describe candidates as [`SearchDocument`]s and leave
//! scoring to whichever [`FuzzyMatcher`] the application was built with.

/// A searchable field and its share of the total relevance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchKey {
    pub name: &'static str,
    pub weight: f64,
}

impl SearchKey {
    pub const fn new(name: &'static str, weight: f64) -> Self {
        Self { name, weight }
    }
}

/// Field texts of one candidate, grouped by key.
///
/// A key may carry several values (tags); a key with no values is treated
/// as an empty field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchDocument {
    fields: Vec<(&'static str, Vec<String>)>,
}

impl SearchDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.push(key, value.into());
        self
    }

    pub fn with_values<I, S>(mut self, key: &'static str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            self.push(key, value.into());
        }
        self
    }

    pub fn values(&self, key: &str) -> &[String] {
        self.fields
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    fn push(&mut self, key: &'static str, value: String) {
        match self.fields.iter_mut().find(|(name, _)| *name == key) {
            Some((_, values)) => values.push(value),
            None => self.fields.push((key, vec![value])),
        }
    }
}

/// A matching candidate, by position in the scored slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMatch {
    pub index: usize,
    /// Higher is more relevant.
    pub relevance: f64,
}

#[cfg_attr(test, mockall::automock)]
pub trait FuzzyMatcher: Send + Sync {
    /// Scores every document against `query` and returns those meeting
    /// `threshold`, best first. Equal relevance keeps input order.
    fn score_candidates(
        &self,
        documents: &[SearchDocument],
        query: &str,
        keys: &[SearchKey],
        threshold: f64,
    ) -> Vec<ScoredMatch>;
}
