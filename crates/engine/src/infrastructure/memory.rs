//! In-memory project store.
//!
//! Keeps projects in insertion order so search ties resolve the same way on
//! every call. Optionally seeded from a JSON snapshot (an array of projects).

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use worldcodex_domain::{ElementCategory, ElementName, Project, ProjectId, WorldElement};

use crate::infrastructure::ports::{ClockPort, ProjectRepo, RepoError};

pub struct InMemoryProjectRepo {
    projects: RwLock<Vec<Project>>,
    clock: Arc<dyn ClockPort>,
}

impl InMemoryProjectRepo {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            projects: RwLock::new(Vec::new()),
            clock,
        }
    }

    /// Seeds the store.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::ConstraintViolation` if two projects share an id.
    pub fn from_projects(
        projects: Vec<Project>,
        clock: Arc<dyn ClockPort>,
    ) -> Result<Self, RepoError> {
        let mut seen = HashSet::new();
        if let Some(dup) = projects.iter().find(|p| !seen.insert(p.id())) {
            return Err(RepoError::constraint(format!(
                "Duplicate project id in snapshot: {}",
                dup.id()
            )));
        }
        Ok(Self {
            projects: RwLock::new(projects),
            clock,
        })
    }

    /// Loads a JSON array of projects from `path`.
    pub async fn from_json_file(
        path: impl AsRef<Path>,
        clock: Arc<dyn ClockPort>,
    ) -> Result<Self, RepoError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            RepoError::serialization(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let projects: Vec<Project> = serde_json::from_str(&raw).map_err(|e| {
            RepoError::serialization(format!("Invalid snapshot {}: {}", path.display(), e))
        })?;
        tracing::info!(
            path = %path.display(),
            projects = projects.len(),
            "Loaded project snapshot"
        );
        Self::from_projects(projects, clock)
    }
}

#[async_trait]
impl ProjectRepo for InMemoryProjectRepo {
    async fn list_projects(&self) -> Result<Vec<Project>, RepoError> {
        Ok(self.projects.read().await.clone())
    }

    async fn get_project(&self, id: ProjectId) -> Result<Option<Project>, RepoError> {
        Ok(self
            .projects
            .read()
            .await
            .iter()
            .find(|p| p.id() == id)
            .cloned())
    }

    async fn save_project(&self, project: &Project) -> Result<(), RepoError> {
        let mut projects = self.projects.write().await;
        match projects.iter_mut().find(|p| p.id() == project.id()) {
            Some(existing) => *existing = project.clone(),
            None => projects.push(project.clone()),
        }
        Ok(())
    }

    async fn create_element(
        &self,
        project_id: ProjectId,
        name: ElementName,
        category: ElementCategory,
    ) -> Result<WorldElement, RepoError> {
        let mut projects = self.projects.write().await;
        let project = projects
            .iter_mut()
            .find(|p| p.id() == project_id)
            .ok_or_else(|| RepoError::not_found("Project", project_id))?;

        let now = self.clock.now();
        let element = WorldElement::new(project_id, name, category, now);
        project.add_element(element.clone(), now)?;
        Ok(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use chrono::{TimeZone, Utc};
    use std::io::Write;
    use worldcodex_domain::ProjectName;

    fn clock() -> Arc<dyn ClockPort> {
        Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
        ))
    }

    fn project(name: &str) -> Project {
        Project::new(ProjectName::new(name).unwrap(), clock().now())
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let repo = InMemoryProjectRepo::new(clock());
        let first = project("Shattered Isles");
        let second = project("Emberfall");
        repo.save_project(&first).await.unwrap();
        repo.save_project(&second).await.unwrap();

        let ids: Vec<_> = repo
            .list_projects()
            .await
            .unwrap()
            .iter()
            .map(Project::id)
            .collect();
        assert_eq!(ids, vec![first.id(), second.id()]);
    }

    #[tokio::test]
    async fn save_replaces_by_id() {
        let repo = InMemoryProjectRepo::new(clock());
        let original = project("Shattered Isles");
        repo.save_project(&original).await.unwrap();

        let renamed = original
            .clone()
            .with_status(worldcodex_domain::ProjectStatus::Archived);
        repo.save_project(&renamed).await.unwrap();

        let all = repo.list_projects().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].status(), worldcodex_domain::ProjectStatus::Archived);
    }

    #[tokio::test]
    async fn create_element_adds_to_owner() {
        let owner = project("Shattered Isles");
        let repo = InMemoryProjectRepo::from_projects(vec![owner.clone()], clock()).unwrap();

        let element = repo
            .create_element(
                owner.id(),
                ElementName::new("Aria").unwrap(),
                ElementCategory::Character,
            )
            .await
            .unwrap();

        let stored = repo.get_project(owner.id()).await.unwrap().unwrap();
        assert_eq!(stored.element(element.id()), Some(&element));
        assert_eq!(element.project_id(), owner.id());
    }

    #[tokio::test]
    async fn create_element_stamps_clock_time() {
        let created_at = Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap();
        let mut mock_clock = crate::infrastructure::ports::MockClockPort::new();
        mock_clock.expect_now().return_const(created_at);

        let owner = project("Shattered Isles");
        let repo =
            InMemoryProjectRepo::from_projects(vec![owner.clone()], Arc::new(mock_clock)).unwrap();

        let element = repo
            .create_element(
                owner.id(),
                ElementName::new("Aria").unwrap(),
                ElementCategory::Character,
            )
            .await
            .unwrap();
        assert_eq!(element.created_at(), created_at);

        let stored = repo.get_project(owner.id()).await.unwrap().unwrap();
        assert_eq!(stored.updated_at(), created_at);
    }

    #[tokio::test]
    async fn create_element_keeps_names_chosen_from_one_snapshot() {
        let owner = project("Shattered Isles");
        let repo = InMemoryProjectRepo::from_projects(vec![owner.clone()], clock()).unwrap();

        // both writers named from the same, now stale, snapshot
        for _ in 0..2 {
            repo.create_element(
                owner.id(),
                ElementName::new("Untitled Character 1").unwrap(),
                ElementCategory::Character,
            )
            .await
            .unwrap();
        }

        let stored = repo.get_project(owner.id()).await.unwrap().unwrap();
        let names: Vec<_> = stored.elements().iter().map(|e| e.name().as_str()).collect();
        assert_eq!(names, vec!["Untitled Character 1", "Untitled Character 1"]);
        assert_ne!(stored.elements()[0].id(), stored.elements()[1].id());
    }

    #[tokio::test]
    async fn create_element_in_unknown_project_is_not_found() {
        let repo = InMemoryProjectRepo::new(clock());
        let err = repo
            .create_element(
                ProjectId::new(),
                ElementName::new("Aria").unwrap(),
                ElementCategory::Character,
            )
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn duplicate_snapshot_ids_are_rejected() {
        let p = project("Shattered Isles");
        let result = InMemoryProjectRepo::from_projects(vec![p.clone(), p], clock());
        assert!(matches!(result, Err(RepoError::ConstraintViolation(_))));
    }

    #[tokio::test]
    async fn loads_json_snapshot() {
        let mut seeded = project("Shattered Isles");
        let aria = WorldElement::new(
            seeded.id(),
            ElementName::new("Aria").unwrap(),
            ElementCategory::Character,
            clock().now(),
        );
        seeded.add_element(aria, clock().now()).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&vec![seeded.clone()]).unwrap()).unwrap();

        let repo = InMemoryProjectRepo::from_json_file(file.path(), clock())
            .await
            .unwrap();
        assert_eq!(repo.list_projects().await.unwrap(), vec![seeded]);
    }

    #[tokio::test]
    async fn malformed_snapshot_is_a_serialization_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let result = InMemoryProjectRepo::from_json_file(file.path(), clock()).await;
        assert!(matches!(result, Err(RepoError::Serialization(_))));
    }
}
