//! Simulation configuration.

use crate::combatant::Archetype;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Battles to fight per matchup
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Ordered (first, second) pairs; the first combatant always opens
    pub matchups: Vec<(Archetype, Archetype)>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            matchups: all_matchups(),
        }
    }
}

impl SimConfig {
    /// Quick config for a fast balance check
    pub fn quick() -> Self {
        Self {
            num_runs: 100,
            ..Default::default()
        }
    }
}

/// Every ordered pairing of archetypes, mirrors included.
pub fn all_matchups() -> Vec<(Archetype, Archetype)> {
    Archetype::ALL
        .into_iter()
        .flat_map(|first| Archetype::ALL.into_iter().map(move |second| (first, second)))
        .collect()
}
