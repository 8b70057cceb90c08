//! Store port for projects and the elements they own.

use async_trait::async_trait;
use worldcodex_domain::{ElementCategory, ElementName, Project, ProjectId, WorldElement};

use super::error::RepoError;

/// Source of truth for projects.
///
/// Callers only ever see snapshots; nothing returned here is kept in sync
/// with later writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepo: Send + Sync {
    /// All projects, in the store's stable order.
    async fn list_projects(&self) -> Result<Vec<Project>, RepoError>;
    async fn get_project(&self, id: ProjectId) -> Result<Option<Project>, RepoError>;
    /// Inserts or replaces a project by id.
    async fn save_project(&self, project: &Project) -> Result<(), RepoError>;
    /// Appends a new element to `project_id` and returns it.
    ///
    /// Callers usually pick the name from an earlier `get_project` snapshot,
    /// so two writers on one project can both pick the same default name.
    /// One writer per project is assumed.
    async fn create_element(
        &self,
        project_id: ProjectId,
        name: ElementName,
        category: ElementCategory,
    ) -> Result<WorldElement, RepoError>;
}
