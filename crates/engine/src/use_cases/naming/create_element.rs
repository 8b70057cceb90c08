//! Create element use case - adds an element to a project, naming it
//! `Untitled <Label> <N>` when the caller gives no name.

use std::sync::Arc;

use worldcodex_domain::{ElementCategory, ElementName, ProjectId, WorldElement};

use super::generate_default_name::default_name_for;
use crate::infrastructure::ports::{ProjectRepo, RepoError};

#[derive(Debug, thiserror::Error)]
pub enum ElementError {
    #[error("Project not found: {0}")]
    NotFound(ProjectId),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

pub struct CreateElement {
    projects: Arc<dyn ProjectRepo>,
}

impl CreateElement {
    pub fn new(projects: Arc<dyn ProjectRepo>) -> Self {
        Self { projects }
    }

    /// # Arguments
    /// * `project_id` - Owning project
    /// * `name` - Explicit name; `None` or blank picks the next default name
    /// * `category` - Element category
    pub async fn execute(
        &self,
        project_id: ProjectId,
        name: Option<String>,
        category: ElementCategory,
    ) -> Result<WorldElement, ElementError> {
        let project = self
            .projects
            .get_project(project_id)
            .await?
            .ok_or(ElementError::NotFound(project_id))?;

        let name = match name.filter(|n| !n.trim().is_empty()) {
            Some(name) => name,
            None => default_name_for(&project, category),
        };
        let name = ElementName::new(name)
            .map_err(|e| ElementError::InvalidInput(format!("Invalid element name: {}", e)))?;

        let element = self
            .projects
            .create_element(project_id, name, category)
            .await?;

        tracing::info!(
            project_id = %project_id,
            element_id = %element.id(),
            category = %category,
            "Created world element"
        );
        Ok(element)
    }
}
