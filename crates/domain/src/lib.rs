//! WorldCodex domain: projects, the world elements they own, and the rules
//! for naming new elements.

pub mod entities;
pub mod error;
pub mod ids;
pub mod naming;
pub mod value_objects;

pub use entities::{ElementCategory, Project, ProjectStatus, WorldElement};
pub use error::DomainError;
pub use ids::{ElementId, ProjectId};
pub use naming::{generate_default_name, FALLBACK_ELEMENT_NAME};
pub use value_objects::{normalize_tags, Description, ElementName, ProjectName};
