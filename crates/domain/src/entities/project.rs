//! Project entity - a user's world, owning its elements
//!
//! # Invariants
//!
//! - Every owned element's `project_id` equals the project's `id`
//! - Element order is insertion order

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::element::{ElementCategory, WorldElement};
use crate::error::DomainError;
use crate::ids::{ElementId, ProjectId};
use crate::value_objects::{normalize_tags, Description, ProjectName};

/// Lifecycle status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Active,
    Draft,
    Completed,
    Archived,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Draft => "draft",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(ProjectStatus::Active),
            "draft" => Ok(ProjectStatus::Draft),
            "completed" => Ok(ProjectStatus::Completed),
            "archived" => Ok(ProjectStatus::Archived),
            _ => Err(DomainError::parse(format!("Unknown project status: {}", s))),
        }
    }
}

/// A worldbuilding project and the elements it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProjectData")]
pub struct Project {
    id: ProjectId,
    name: ProjectName,
    description: Description,
    tags: Vec<String>,
    status: ProjectStatus,
    elements: Vec<WorldElement>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Unchecked wire shape; converted into `Project` after the ownership check.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectData {
    id: ProjectId,
    name: ProjectName,
    #[serde(default)]
    description: Description,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    status: ProjectStatus,
    #[serde(default)]
    elements: Vec<WorldElement>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProjectData> for Project {
    type Error = DomainError;

    fn try_from(data: ProjectData) -> Result<Self, Self::Error> {
        if let Some(stray) = data.elements.iter().find(|e| e.project_id() != data.id) {
            return Err(DomainError::constraint(format!(
                "Element {} belongs to project {}, not {}",
                stray.id(),
                stray.project_id(),
                data.id
            )));
        }
        Ok(Self {
            id: data.id,
            name: data.name,
            description: data.description,
            tags: normalize_tags(data.tags),
            status: data.status,
            elements: data.elements,
            created_at: data.created_at,
            updated_at: data.updated_at,
        })
    }
}

impl Project {
    pub fn new(name: ProjectName, now: DateTime<Utc>) -> Self {
        Self {
            id: ProjectId::new(),
            name,
            description: Description::empty(),
            tags: Vec::new(),
            status: ProjectStatus::default(),
            elements: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    // =========================================================================
    // Builders
    // =========================================================================

    pub fn with_description(mut self, description: Description) -> Self {
        self.description = description;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = normalize_tags(tags);
        self
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> ProjectId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    #[inline]
    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[inline]
    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn elements(&self) -> &[WorldElement] {
        &self.elements
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // =========================================================================
    // Element ownership
    // =========================================================================

    /// Adds an element to this project.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Constraint` if the element was created for a
    /// different project or its id is already present.
    pub fn add_element(
        &mut self,
        element: WorldElement,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        if element.project_id() != self.id {
            return Err(DomainError::constraint(format!(
                "Element {} belongs to project {}, not {}",
                element.id(),
                element.project_id(),
                self.id
            )));
        }
        if self.element(element.id()).is_some() {
            return Err(DomainError::constraint(format!(
                "Element {} already exists in project {}",
                element.id(),
                self.id
            )));
        }
        self.elements.push(element);
        self.updated_at = now;
        Ok(())
    }

    pub fn element(&self, id: ElementId) -> Option<&WorldElement> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// Removes and returns the element, if present.
    pub fn remove_element(&mut self, id: ElementId, now: DateTime<Utc>) -> Option<WorldElement> {
        let index = self.elements.iter().position(|e| e.id() == id)?;
        self.updated_at = now;
        Some(self.elements.remove(index))
    }

    pub fn elements_in_category(
        &self,
        category: ElementCategory,
    ) -> impl Iterator<Item = &WorldElement> {
        self.elements.iter().filter(move |e| e.category() == category)
    }

    /// Names of elements whose category displays as `label`.
    ///
    /// Categories sharing a label share one default-name namespace.
    pub fn element_names_for_label<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a str> {
        self.elements
            .iter()
            .filter(move |e| e.category().label() == label)
            .map(|e| e.name().as_str())
    }
}
