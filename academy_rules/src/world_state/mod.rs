//! The content graph - every location, its menu of options, and the exam.
//!
//! The graph is built once, validated, and never mutated afterwards.

mod exam;

pub use exam::*;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::RulesError;
use crate::mechanics::{ActionKind, Skill, SkillList};

/// The bundled game content.
pub const ACADEMY_CONTENT: &str = include_str!("../../content/academy.toml");

/// Identifier of a location, e.g. `cloud_academy`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(String);

impl LocationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LocationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// What choosing an option leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionTarget<'a> {
    Destination(&'a LocationId),
    Action(ActionKind),
}

/// A single menu entry at a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationOption {
    pub text: String,
    pub destination: Option<LocationId>,
    pub action: Option<ActionKind>,
    /// Applied unconditionally once the skill check passes.
    pub skill_gain: SkillList,
    /// Minimum levels, all of which must be met. Checked in this order.
    pub skill_check: SkillList,
}

impl LocationOption {
    /// Destination or action. `None` only for malformed options, which the
    /// graph rejects at load time.
    pub fn target(&self) -> Option<OptionTarget<'_>> {
        match (&self.destination, self.action) {
            (Some(destination), None) => Some(OptionTarget::Destination(destination)),
            (None, Some(action)) => Some(OptionTarget::Action(action)),
            _ => None,
        }
    }
}

/// A node of the content graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub description: String,
    pub options: Vec<LocationOption>,
}

/// On-disk shape of the content file.
#[derive(Debug, Deserialize)]
struct ContentFile {
    start: LocationId,
    locations: HashMap<LocationId, LocationRecord>,
    exam: Vec<ExamQuestion>,
}

#[derive(Debug, Deserialize)]
struct LocationRecord {
    name: String,
    description: String,
    #[serde(default)]
    options: Vec<OptionRecord>,
}

#[derive(Debug, Deserialize)]
struct OptionRecord {
    text: String,
    destination: Option<LocationId>,
    action: Option<ActionKind>,
    #[serde(default)]
    skill_gain: SkillTable,
    #[serde(default)]
    skill_check: SkillTable,
}

/// An inline `{ skill = amount }` table, kept in the order it was written.
#[derive(Debug, Default)]
struct SkillTable(Vec<(String, u32)>);

impl<'de> Deserialize<'de> for SkillTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SkillTableVisitor;

        impl<'de> Visitor<'de> for SkillTableVisitor {
            type Value = SkillTable;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a table of skill names to amounts")
            }

            fn visit_map<M>(self, mut map: M) -> Result<SkillTable, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, u32>()? {
                    entries.push(entry);
                }
                Ok(SkillTable(entries))
            }
        }

        deserializer.deserialize_map(SkillTableVisitor)
    }
}

impl SkillTable {
    fn parse(self) -> Result<SkillList, RulesError> {
        self.0
            .into_iter()
            .map(|(name, value)| Ok((name.parse::<Skill>()?, value)))
            .collect()
    }
}

impl OptionRecord {
    fn into_option(self) -> Result<LocationOption, RulesError> {
        Ok(LocationOption {
            text: self.text,
            destination: self.destination,
            action: self.action,
            skill_gain: self.skill_gain.parse()?,
            skill_check: self.skill_check.parse()?,
        })
    }
}

/// Immutable map of locations plus the exam question set.
#[derive(Debug, Clone)]
pub struct ContentGraph {
    start: LocationId,
    locations: HashMap<LocationId, Location>,
    exam: Exam,
}

impl ContentGraph {
    /// Build and validate a graph from its parts.
    pub fn new(
        start: LocationId,
        locations: impl IntoIterator<Item = Location>,
        exam: Exam,
    ) -> Result<Self, RulesError> {
        let graph = Self {
            start,
            locations: locations
                .into_iter()
                .map(|location| (location.id.clone(), location))
                .collect(),
            exam,
        };
        graph.validate()?;
        Ok(graph)
    }

    /// Parse and validate TOML content.
    pub fn from_toml_str(source: &str) -> Result<Self, RulesError> {
        let file: ContentFile = toml::from_str(source)?;

        let mut locations = Vec::with_capacity(file.locations.len());
        for (id, record) in file.locations {
            let options = record
                .options
                .into_iter()
                .map(OptionRecord::into_option)
                .collect::<Result<Vec<_>, _>>()?;
            locations.push(Location {
                id,
                name: record.name,
                description: record.description,
                options,
            });
        }

        Self::new(file.start, locations, Exam::new(file.exam)?)
    }

    /// The content that ships with the game.
    pub fn academy() -> Result<Self, RulesError> {
        Self::from_toml_str(ACADEMY_CONTENT)
    }

    pub fn start(&self) -> &LocationId {
        &self.start
    }

    pub fn exam(&self) -> &Exam {
        &self.exam
    }

    pub fn get_location(&self, id: &LocationId) -> Result<&Location, RulesError> {
        self.locations
            .get(id)
            .ok_or_else(|| RulesError::LocationNotFound(id.clone()))
    }

    pub fn contains(&self, id: &LocationId) -> bool {
        self.locations.contains_key(id)
    }

    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Fail unless every id in `ids` names a location.
    pub fn require<'a>(&self, ids: impl IntoIterator<Item = &'a LocationId>) -> Result<(), RulesError> {
        for id in ids {
            self.get_location(id)?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), RulesError> {
        self.get_location(&self.start)?;

        for location in self.locations.values() {
            if location.options.is_empty() {
                return Err(RulesError::NoOptions(location.id.clone()));
            }

            for (index, option) in location.options.iter().enumerate() {
                // 1-based, as shown in the menu
                let number = index + 1;
                match (&option.destination, option.action) {
                    (Some(_), Some(_)) => {
                        return Err(RulesError::AmbiguousOption {
                            location: location.id.clone(),
                            option: number,
                        })
                    }
                    (None, None) => {
                        return Err(RulesError::EmptyOption {
                            location: location.id.clone(),
                            option: number,
                        })
                    }
                    (Some(target), None) if !self.contains(target) => {
                        return Err(RulesError::DanglingDestination {
                            location: location.id.clone(),
                            option: number,
                            target: target.clone(),
                        })
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }
}
