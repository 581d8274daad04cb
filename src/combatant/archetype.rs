use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::combat::attack::{self, AttackOutcome};
use crate::core::constants::*;
use crate::core::rolls::RollSource;
use crate::error::DuelError;

/// Fighting style of a combatant. Each archetype binds one attack policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Precise,
    Agile,
    Heavy,
    Balanced,
}

impl Archetype {
    pub const ALL: [Archetype; 4] = [
        Archetype::Precise,
        Archetype::Agile,
        Archetype::Heavy,
        Archetype::Balanced,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Archetype::Precise => "Precise",
            Archetype::Agile => "Agile",
            Archetype::Heavy => "Heavy",
            Archetype::Balanced => "Balanced",
        }
    }

    /// Name of the roster character that fights with this archetype.
    pub fn roster_label(self) -> &'static str {
        match self {
            Archetype::Precise => "CamilleDebugger",
            Archetype::Agile => "KensemiCollon",
            Archetype::Heavy => "LanceBackend",
            Archetype::Balanced => "JeffPancitCanton",
        }
    }

    /// Starting max health of the roster character.
    pub fn default_max_health(self) -> u32 {
        match self {
            Archetype::Precise => PRECISE_MAX_HEALTH,
            Archetype::Agile => AGILE_MAX_HEALTH,
            Archetype::Heavy => HEAVY_MAX_HEALTH,
            Archetype::Balanced => BALANCED_MAX_HEALTH,
        }
    }

    /// Inclusive damage range of a regular (non-crit, non-miss) hit.
    pub fn damage_range(self) -> (u32, u32) {
        match self {
            Archetype::Precise => (PRECISE_DAMAGE_MIN, PRECISE_DAMAGE_MAX),
            Archetype::Agile => (AGILE_DAMAGE_MIN, AGILE_DAMAGE_MAX),
            Archetype::Heavy => (HEAVY_DAMAGE_MIN, HEAVY_DAMAGE_MAX),
            Archetype::Balanced => (BALANCED_DAMAGE_MIN, BALANCED_DAMAGE_MAX),
        }
    }

    /// Rolls one attack using this archetype's policy.
    pub fn roll_attack(self, rolls: &mut impl RollSource) -> AttackOutcome {
        match self {
            Archetype::Precise => attack::precise_strike(rolls),
            Archetype::Agile => attack::agile_strike(rolls),
            Archetype::Heavy => attack::heavy_strike(rolls),
            Archetype::Balanced => attack::balanced_strike(rolls),
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the archetype name or its roster label, ignoring case and
/// surrounding whitespace.
impl FromStr for Archetype {
    type Err = DuelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Archetype::ALL
            .into_iter()
            .find(|a| {
                a.name().eq_ignore_ascii_case(wanted)
                    || a.roster_label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| DuelError::UnknownArchetype(wanted.to_string()))
    }
}
