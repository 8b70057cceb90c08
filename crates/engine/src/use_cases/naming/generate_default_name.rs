//! Generate default name use case - picks the next free
//! `Untitled <Label> <N>` for a project and category.

use std::sync::Arc;

use worldcodex_domain::{
    generate_default_name, ElementCategory, Project, ProjectId, FALLBACK_ELEMENT_NAME,
};

use crate::infrastructure::ports::ProjectRepo;

/// Default name for a new `category` element in `project`.
///
/// Categories are scoped by their label, not their key.
pub fn default_name_for(project: &Project, category: ElementCategory) -> String {
    let label = category.label();
    generate_default_name(project.element_names_for_label(label), label)
}

pub struct GenerateDefaultName {
    projects: Arc<dyn ProjectRepo>,
}

impl GenerateDefaultName {
    pub fn new(projects: Arc<dyn ProjectRepo>) -> Self {
        Self { projects }
    }

    /// Never fails: an unknown project, or a store that cannot answer, yields
    /// [`FALLBACK_ELEMENT_NAME`].
    pub async fn execute(&self, project_id: ProjectId, category: ElementCategory) -> String {
        let project = match self.projects.get_project(project_id).await {
            Ok(Some(project)) => project,
            Ok(None) => {
                tracing::warn!(
                    project_id = %project_id,
                    "Cannot generate default name: project not found"
                );
                return FALLBACK_ELEMENT_NAME.to_string();
            }
            Err(e) => {
                tracing::warn!(
                    project_id = %project_id,
                    error = %e,
                    "Cannot generate default name: store unavailable"
                );
                return FALLBACK_ELEMENT_NAME.to_string();
            }
        };

        let name = default_name_for(&project, category);
        tracing::debug!(
            project_id = %project_id,
            category = %category,
            name = %name,
            "Generated default element name"
        );
        name
    }
}
