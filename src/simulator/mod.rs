//! Monte Carlo balance simulator.
//!
//! Fights thousands of seeded roster battles per matchup to analyze:
//! - Win rate of the opening combatant for every archetype pairing
//! - Battle length in turns
//! - How much health winners have left
//!
//! Battles go through the same engine as interactive play, so results
//! match real fights.

mod config;
mod report;
mod runner;

pub use config::{all_matchups, SimConfig};
pub use report::{ArchetypeSummary, MatchupStats, SimReport};
pub use runner::{run_simulation, simulate_matchup};
