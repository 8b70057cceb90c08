//! Domain entities - identity-bearing objects owned by the store.

pub mod element;
pub mod project;

pub use element::{ElementCategory, WorldElement};
pub use project::{Project, ProjectStatus};
