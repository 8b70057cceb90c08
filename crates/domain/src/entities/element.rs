//! World element entity - a character, location, item, ... owned by a project

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::{ElementId, ProjectId};
use crate::value_objects::{normalize_tags, ElementName};

/// Category of a world element.
///
/// The kebab-case key is the machine identifier; the label is what users see
/// and what default names are built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementCategory {
    Character,
    Location,
    ItemObject,
    /// Older clients spelled this `magic-system`.
    #[serde(alias = "magic-system")]
    MagicPower,
    Event,
    Organization,
    CreatureSpecies,
    CultureSociety,
    ReligionBelief,
    Language,
    Technology,
    /// User-defined element type
    Custom,
}

impl ElementCategory {
    pub fn all() -> &'static [ElementCategory] {
        &[
            ElementCategory::Character,
            ElementCategory::Location,
            ElementCategory::ItemObject,
            ElementCategory::MagicPower,
            ElementCategory::Event,
            ElementCategory::Organization,
            ElementCategory::CreatureSpecies,
            ElementCategory::CultureSociety,
            ElementCategory::ReligionBelief,
            ElementCategory::Language,
            ElementCategory::Technology,
            ElementCategory::Custom,
        ]
    }

    /// Machine key, as stored and serialized.
    pub fn key(&self) -> &'static str {
        match self {
            ElementCategory::Character => "character",
            ElementCategory::Location => "location",
            ElementCategory::ItemObject => "item-object",
            ElementCategory::MagicPower => "magic-power",
            ElementCategory::Event => "event",
            ElementCategory::Organization => "organization",
            ElementCategory::CreatureSpecies => "creature-species",
            ElementCategory::CultureSociety => "culture-society",
            ElementCategory::ReligionBelief => "religion-belief",
            ElementCategory::Language => "language",
            ElementCategory::Technology => "technology",
            ElementCategory::Custom => "custom",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ElementCategory::Character => "Character",
            ElementCategory::Location => "Location",
            ElementCategory::ItemObject => "Item",
            ElementCategory::MagicPower => "Magic",
            ElementCategory::Event => "Event",
            ElementCategory::Organization => "Organization",
            ElementCategory::CreatureSpecies => "Creature",
            ElementCategory::CultureSociety => "Culture",
            ElementCategory::ReligionBelief => "Religion",
            ElementCategory::Language => "Language",
            ElementCategory::Technology => "Technology",
            ElementCategory::Custom => "Custom",
        }
    }
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ElementCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if key == "magic-system" {
            return Ok(ElementCategory::MagicPower);
        }
        ElementCategory::all()
            .iter()
            .copied()
            .find(|category| category.key() == key)
            .ok_or_else(|| DomainError::parse(format!("Unknown element category: {}", s)))
    }
}

/// A worldbuilding entity owned by exactly one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "WorldElementData")]
pub struct WorldElement {
    id: ElementId,
    project_id: ProjectId,
    name: ElementName,
    category: ElementCategory,
    description: Option<String>,
    tags: Vec<String>,
    /// 0..=100
    completion_percentage: u8,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Wire shape; normalized the same way the builders and mutators normalize.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorldElementData {
    id: ElementId,
    project_id: ProjectId,
    name: ElementName,
    category: ElementCategory,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    completion_percentage: u8,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<WorldElementData> for WorldElement {
    fn from(data: WorldElementData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            name: data.name,
            category: data.category,
            description: data.description.and_then(non_blank),
            tags: normalize_tags(data.tags),
            completion_percentage: data.completion_percentage.min(100),
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }
}

impl WorldElement {
    pub fn new(
        project_id: ProjectId,
        name: ElementName,
        category: ElementCategory,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ElementId::new(),
            project_id,
            name,
            category,
            description: None,
            tags: Vec::new(),
            completion_percentage: 0,
            created_at: now,
            updated_at: now,
        }
    }

    // Builders

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = non_blank(description.into());
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

    // Accessors

    #[inline]
    pub fn id(&self) -> ElementId {
        self.id
    }

    #[inline]
    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    #[inline]
    pub fn name(&self) -> &ElementName {
        &self.name
    }

    #[inline]
    pub fn category(&self) -> ElementCategory {
        self.category
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn completion_percentage(&self) -> u8 {
        self.completion_percentage
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    pub fn set_name(&mut self, name: ElementName, now: DateTime<Utc>) {
        self.name = name;
        self.updated_at = now;
    }

    pub fn set_description(&mut self, description: Option<String>, now: DateTime<Utc>) {
        self.description = description.and_then(non_blank);
        self.updated_at = now;
    }

    pub fn set_tags(&mut self, tags: Vec<String>, now: DateTime<Utc>) {
        self.tags = normalize_tags(tags);
        self.updated_at = now;
    }

    /// Values above 100 are clamped.
    pub fn set_completion(&mut self, percentage: u8, now: DateTime<Utc>) {
        self.completion_percentage = percentage.min(100);
        self.updated_at = now;
    }
}

fn non_blank(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
