//! Per-archetype attack policies.
//!
//! Each policy is a pure function of the roll source: it never touches a
//! combatant. Self-healing is reported in the outcome and applied by the
//! battle engine.

use serde::{Deserialize, Serialize};

use crate::core::constants::*;
use crate::core::rolls::RollSource;

/// Result of one attack roll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    /// Damage to apply to the target (0 on a miss).
    pub damage: u32,
    /// Health the attacker restores to itself after the hit (0 if none).
    pub self_heal: u32,
    /// Damage was multiplied by a critical hit.
    pub critical: bool,
    /// The attack missed entirely.
    pub missed: bool,
}

impl AttackOutcome {
    pub fn hit(damage: u32) -> Self {
        Self {
            damage,
            ..Default::default()
        }
    }

    pub fn miss() -> Self {
        Self {
            missed: true,
            ..Default::default()
        }
    }
}

/// Precise: 15-25 damage, nothing else.
pub fn precise_strike(rolls: &mut impl RollSource) -> AttackOutcome {
    AttackOutcome::hit(rolls.roll_range(PRECISE_DAMAGE_MIN, PRECISE_DAMAGE_MAX))
}

/// Agile: 10-18 damage, doubled on a 20% crit.
pub fn agile_strike(rolls: &mut impl RollSource) -> AttackOutcome {
    let base = rolls.roll_range(AGILE_DAMAGE_MIN, AGILE_DAMAGE_MAX);
    if rolls.roll_chance(AGILE_CRIT_CHANCE) {
        AttackOutcome {
            damage: base * AGILE_CRIT_MULTIPLIER,
            critical: true,
            ..Default::default()
        }
    } else {
        AttackOutcome::hit(base)
    }
}

/// Heavy: 10% miss, otherwise 20-30 damage.
///
/// The miss is rolled first; a miss consumes no damage roll.
pub fn heavy_strike(rolls: &mut impl RollSource) -> AttackOutcome {
    if rolls.roll_chance(HEAVY_MISS_CHANCE) {
        return AttackOutcome::miss();
    }
    AttackOutcome::hit(rolls.roll_range(HEAVY_DAMAGE_MIN, HEAVY_DAMAGE_MAX))
}

/// Balanced: 12-22 damage, then a 30% chance to self-heal 5-10.
pub fn balanced_strike(rolls: &mut impl RollSource) -> AttackOutcome {
    let damage = rolls.roll_range(BALANCED_DAMAGE_MIN, BALANCED_DAMAGE_MAX);
    let self_heal = if rolls.roll_chance(BALANCED_HEAL_CHANCE) {
        rolls.roll_range(BALANCED_HEAL_MIN, BALANCED_HEAL_MAX)
    } else {
        0
    };
    AttackOutcome {
        damage,
        self_heal,
        ..Default::default()
    }
}
