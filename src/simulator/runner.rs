//! Runs seeded battles for each configured matchup.

use super::config::SimConfig;
use super::report::{MatchupStats, SimReport};
use crate::battle::{self, Side};
use crate::combatant::{roster_combatant, Archetype};
use crate::error::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport> {
    let mut matchups = Vec::with_capacity(config.matchups.len());

    for (matchup_idx, &(first, second)) in config.matchups.iter().enumerate() {
        // Each battle gets its own stream so a matchup's results do not
        // depend on which matchups ran before it
        let base_seed = config
            .seed
            .map(|seed| seed.wrapping_add(matchup_idx as u64 * config.num_runs as u64));

        let stats = simulate_matchup(first, second, config.num_runs, base_seed)?;
        tracing::info!(
            first = %first,
            second = %second,
            first_win_rate = stats.first_win_rate(),
            avg_turns = stats.avg_turns(),
            "matchup simulated"
        );
        matchups.push(stats);
    }

    Ok(SimReport::from_matchups(config.num_runs, config.seed, matchups))
}

/// Fight `num_runs` roster battles between two archetypes.
pub fn simulate_matchup(
    first: Archetype,
    second: Archetype,
    num_runs: u32,
    base_seed: Option<u64>,
) -> Result<MatchupStats> {
    let mut stats = MatchupStats::new(first, second);

    for run_idx in 0..num_runs {
        let rng = match base_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let result = battle::run(roster_combatant(first), roster_combatant(second), rng)?;
        let winner_health_pct = result
            .winner()
            .map(|w| w.health() as f64 / w.max_health() as f64)
            .unwrap_or(0.0);

        stats.record(
            result.outcome.winner_side(),
            result.turn_count(),
            winner_health_pct,
        );
    }

    Ok(stats)
}

impl MatchupStats {
    fn record(&mut self, winner: Option<Side>, turns: u32, winner_health_pct: f64) {
        self.battles += 1;
        match winner {
            Some(Side::First) => self.first_wins += 1,
            Some(Side::Second) => self.second_wins += 1,
            None => self.draws += 1,
        }
        self.total_turns += turns as u64;
        self.min_turns = Some(self.min_turns.map_or(turns, |m| m.min(turns)));
        self.max_turns = self.max_turns.max(turns);
        self.total_winner_health_pct += winner_health_pct;
    }
}
