//! Component definitions for the player.

use serde::{Deserialize, Serialize};

use crate::mechanics::{Skill, SkillMap};

/// Health never exceeds this value.
pub const MAX_HEALTH: i32 = 100;

/// Level every skill starts at.
pub const STARTING_SKILL_LEVEL: u32 = 1;

/// Health pool. Damage may drive it below zero; healing is capped at
/// [`MAX_HEALTH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
}

impl Default for Health {
    fn default() -> Self {
        Self {
            current: MAX_HEALTH,
        }
    }
}

/// Whether a damage event left the player standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vitality {
    Alive,
    /// Health went from positive to zero or below with this hit.
    Depleted,
}

/// Amounts beyond `i32::MAX` saturate rather than wrap.
fn clamp_amount(amount: u32) -> i32 {
    i32::try_from(amount).unwrap_or(i32::MAX)
}

impl Health {
    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }

    /// Subtract `amount`, reporting the transition into depletion.
    pub fn damage(&mut self, amount: u32) -> Vitality {
        let was_alive = !self.is_depleted();
        self.current = self.current.saturating_sub(clamp_amount(amount));
        if was_alive && self.is_depleted() {
            Vitality::Depleted
        } else {
            Vitality::Alive
        }
    }

    pub fn heal(&mut self, amount: u32) {
        self.current = self.current.saturating_add(clamp_amount(amount)).min(MAX_HEALTH);
    }
}

/// Skill levels keyed by [`Skill`], always populated for every skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    levels: SkillMap,
}

impl Default for SkillSet {
    fn default() -> Self {
        Self {
            levels: Skill::ALL
                .into_iter()
                .map(|skill| (skill, STARTING_SKILL_LEVEL))
                .collect(),
        }
    }
}

impl SkillSet {
    pub fn level(&self, skill: Skill) -> u32 {
        self.levels.get(&skill).copied().unwrap_or(0)
    }

    /// Raise a skill and return its new level. There is no upper bound.
    pub fn improve(&mut self, skill: Skill, amount: u32) -> u32 {
        let level = self.levels.entry(skill).or_insert(0);
        *level = level.saturating_add(amount);
        *level
    }

    pub fn as_map(&self) -> &SkillMap {
        &self.levels
    }

    pub fn iter(&self) -> impl Iterator<Item = (Skill, u32)> + '_ {
        self.levels.iter().map(|(skill, level)| (*skill, *level))
    }
}

/// Collected items in acquisition order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub items: Vec<String>,
}

impl Inventory {
    pub fn add(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_reports_depletion_once() {
        let mut health = Health { current: 30 };
        assert_eq!(health.damage(20), Vitality::Alive);
        assert_eq!(health.current, 10);
        assert_eq!(health.damage(20), Vitality::Depleted);
        assert_eq!(health.current, -10);
        // Already down: no second transition.
        assert_eq!(health.damage(5), Vitality::Alive);
    }

    #[test]
    fn test_damage_to_exactly_zero_depletes() {
        let mut health = Health { current: 20 };
        assert_eq!(health.damage(20), Vitality::Depleted);
        assert!(health.is_depleted());
    }

    #[test]
    fn test_heal_clamps_at_max() {
        let mut health = Health { current: 90 };
        health.heal(25);
        assert_eq!(health.current, MAX_HEALTH);
    }

    #[test]
    fn test_huge_amounts_do_not_wrap() {
        let mut health = Health { current: 50 };
        assert_eq!(health.damage(u32::MAX), Vitality::Depleted);
        assert!(health.current < 0);

        health.heal(u32::MAX);
        assert_eq!(health.current, MAX_HEALTH);

        let mut health = Health { current: 50 };
        health.heal(3_000_000_000);
        assert_eq!(health.current, MAX_HEALTH);
        assert_eq!(health.damage(3_000_000_000), Vitality::Depleted);
        assert!(health.is_depleted());
    }

    #[test]
    fn test_default_skills_start_at_one() {
        let skills = SkillSet::default();
        for skill in Skill::ALL {
            assert_eq!(skills.level(skill), STARTING_SKILL_LEVEL);
        }
    }

    #[test]
    fn test_inventory_keeps_duplicates_in_order() {
        let mut inventory = Inventory::default();
        inventory.add("S3 Access Key");
        inventory.add("EC2 Instance Key");
        inventory.add("S3 Access Key");
        assert_eq!(
            inventory.items,
            vec!["S3 Access Key", "EC2 Instance Key", "S3 Access Key"]
        );
    }
}
