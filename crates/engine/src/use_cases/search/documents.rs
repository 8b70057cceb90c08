//! Search keys and document builders for elements and projects.

use worldcodex_domain::{Project, WorldElement};

use crate::infrastructure::ports::{SearchDocument, SearchKey};

/// Fraction of the query length that may be edits for a field to match.
pub const SEARCH_THRESHOLD: f64 = 0.4;

pub const ELEMENT_SEARCH_KEYS: [SearchKey; 4] = [
    SearchKey::new("name", 0.4),
    SearchKey::new("description", 0.3),
    SearchKey::new("tags", 0.2),
    SearchKey::new("category", 0.1),
];

pub const PROJECT_SEARCH_KEYS: [SearchKey; 4] = [
    SearchKey::new("name", 0.4),
    SearchKey::new("description", 0.3),
    SearchKey::new("tags", 0.2),
    SearchKey::new("status", 0.1),
];

/// Category matches on both its key and its label.
pub fn element_document(element: &WorldElement) -> SearchDocument {
    SearchDocument::new()
        .with_value("name", element.name().as_str())
        .with_values("description", element.description())
        .with_values("tags", element.tags().iter().map(String::as_str))
        .with_values(
            "category",
            [element.category().key(), element.category().label()],
        )
}

pub fn project_document(project: &Project) -> SearchDocument {
    SearchDocument::new()
        .with_value("name", project.name().as_str())
        .with_value("description", project.description().as_str())
        .with_values("tags", project.tags().iter().map(String::as_str))
        .with_value("status", project.status().as_str())
}
