use serde::Serialize;

use super::archetype::Archetype;
use crate::combat::AttackOutcome;
use crate::core::rolls::RollSource;
use crate::error::{DuelError, Result};

/// One fighter in a duel.
///
/// Health is private and clamped to `[0, max_health]` by the only two
/// mutators, [`Combatant::take_damage`] and [`Combatant::heal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Combatant {
    name: String,
    archetype: Archetype,
    max_health: u32,
    health: u32,
}

impl Combatant {
    pub fn new(name: impl Into<String>, archetype: Archetype, max_health: u32) -> Result<Self> {
        let name = validate_name(name.into())?;
        if max_health == 0 {
            return Err(DuelError::ZeroMaxHealth);
        }
        Ok(Self {
            name,
            archetype,
            max_health,
            health: max_health,
        })
    }

    /// Roster labels are non-empty and roster health is positive, so this
    /// skips validation.
    pub(super) fn from_roster(archetype: Archetype) -> Self {
        let max_health = archetype.default_max_health();
        Self {
            name: archetype.roster_label().to_string(),
            archetype,
            max_health,
            health: max_health,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Still at the health it was created with.
    pub fn is_fresh(&self) -> bool {
        self.health == self.max_health
    }

    /// Replaces the display name. Blank names are rejected and leave the
    /// current name in place.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<()> {
        self.name = validate_name(name.into())?;
        Ok(())
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    /// Rolls this combatant's attack. Does not apply any effects.
    pub fn attack(&self, rolls: &mut impl RollSource) -> AttackOutcome {
        self.archetype.roll_attack(rolls)
    }
}

fn validate_name(name: String) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DuelError::EmptyName);
    }
    if trimmed.len() == name.len() {
        Ok(name)
    } else {
        Ok(trimmed.to_string())
    }
}
