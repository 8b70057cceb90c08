//! Value objects - validated, immutable building blocks of the domain.

mod names;
mod tags;

pub use names::{Description, ElementName, ProjectName};
pub use tags::normalize_tags;
