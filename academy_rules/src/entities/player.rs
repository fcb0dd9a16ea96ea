//! The player character.

use serde::{Deserialize, Serialize};

use super::{Health, Inventory, PlayerId, SkillSet, Vitality};
use crate::error::RulesError;
use crate::mechanics::Skill;
use crate::world_state::LocationId;

/// Mutable state of the one player in a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    name: String,
    pub skills: SkillSet,
    pub health: Health,
    /// Only ever increases.
    pub score: u32,
    pub inventory: Inventory,
    pub current_location: LocationId,
}

impl Player {
    /// Create a fresh player standing at `start`.
    pub fn new(name: impl Into<String>, start: LocationId) -> Self {
        Self {
            id: PlayerId::new(),
            name: name.into(),
            skills: SkillSet::default(),
            health: Health::default(),
            score: 0,
            inventory: Inventory::default(),
            current_location: start,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_to_inventory(&mut self, item: impl Into<String>) {
        self.inventory.add(item);
    }

    /// Add points and return the new total.
    pub fn add_score(&mut self, points: u32) -> u32 {
        self.score = self.score.saturating_add(points);
        self.score
    }

    pub fn skill_level(&self, skill: Skill) -> u32 {
        self.skills.level(skill)
    }

    /// Raise a skill and return its new level.
    pub fn improve_skill(&mut self, skill: Skill, amount: u32) -> u32 {
        self.skills.improve(skill, amount)
    }

    /// Raise a skill by name. Unknown names leave every level untouched.
    pub fn improve_skill_named(&mut self, skill: &str, amount: u32) -> Result<u32, RulesError> {
        let skill: Skill = skill.parse()?;
        Ok(self.improve_skill(skill, amount))
    }

    pub fn take_damage(&mut self, amount: u32) -> Vitality {
        self.health.damage(amount)
    }

    pub fn heal(&mut self, amount: u32) {
        self.health.heal(amount);
    }

    pub fn is_alive(&self) -> bool {
        !self.health.is_depleted()
    }
}
