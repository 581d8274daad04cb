//! Simulation report generation.

use serde::Serialize;

use crate::combatant::Archetype;

/// Aggregated results of every battle between one ordered pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchupStats {
    pub first: Archetype,
    pub second: Archetype,
    pub battles: u32,
    pub first_wins: u32,
    pub second_wins: u32,
    pub draws: u32,
    pub total_turns: u64,
    pub min_turns: Option<u32>,
    pub max_turns: u32,
    /// Sum over battles of winner health / winner max health
    pub total_winner_health_pct: f64,
}

impl MatchupStats {
    pub fn new(first: Archetype, second: Archetype) -> Self {
        Self {
            first,
            second,
            battles: 0,
            first_wins: 0,
            second_wins: 0,
            draws: 0,
            total_turns: 0,
            min_turns: None,
            max_turns: 0,
            total_winner_health_pct: 0.0,
        }
    }

    pub fn first_win_rate(&self) -> f64 {
        ratio(self.first_wins as f64, self.battles)
    }

    pub fn second_win_rate(&self) -> f64 {
        ratio(self.second_wins as f64, self.battles)
    }

    pub fn avg_turns(&self) -> f64 {
        ratio(self.total_turns as f64, self.battles)
    }

    pub fn avg_winner_health_pct(&self) -> f64 {
        ratio(self.total_winner_health_pct, self.battles)
    }
}

/// Per-archetype totals across every matchup it took part in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchetypeSummary {
    pub archetype: Archetype,
    pub battles: u32,
    pub wins: u32,
    pub win_rate: f64,
}

/// Aggregated results from a whole simulation.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub seed: Option<u64>,
    pub matchups: Vec<MatchupStats>,
    pub archetypes: Vec<ArchetypeSummary>,
}

impl SimReport {
    pub fn from_matchups(num_runs: u32, seed: Option<u64>, matchups: Vec<MatchupStats>) -> Self {
        let archetypes = Archetype::ALL
            .into_iter()
            .map(|archetype| {
                let mut battles = 0;
                let mut wins = 0;
                // Mirror matches count once per side
                for m in &matchups {
                    if m.first == archetype {
                        battles += m.battles;
                        wins += m.first_wins;
                    }
                    if m.second == archetype {
                        battles += m.battles;
                        wins += m.second_wins;
                    }
                }
                ArchetypeSummary {
                    archetype,
                    battles,
                    wins,
                    win_rate: ratio(wins as f64, battles),
                }
            })
            .collect();

        Self {
            num_runs,
            seed,
            matchups,
            archetypes,
        }
    }

    pub fn total_battles(&self) -> u32 {
        self.matchups.iter().map(|m| m.battles).sum()
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    DUEL SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Battles: {} total, {} per matchup",
            self.total_battles(),
            self.num_runs
        ));
        if let Some(seed) = self.seed {
            report.push_str(&format!(", seed {}", seed));
        }
        report.push_str("\n\n");

        report.push_str("── MATCHUPS ─────────────────────────────────────────────────────\n");
        report.push_str("  First      Second     1st Win   2nd Win   Avg Turns   Winner HP\n");
        report.push_str("  ─────      ──────     ───────   ───────   ─────────   ─────────\n");
        for m in &self.matchups {
            report.push_str(&format!(
                "  {:<9}  {:<9}  {:>6.1}%   {:>6.1}%   {:>9.1}   {:>8.1}%\n",
                m.first.name(),
                m.second.name(),
                m.first_win_rate() * 100.0,
                m.second_win_rate() * 100.0,
                m.avg_turns(),
                m.avg_winner_health_pct() * 100.0
            ));
        }
        report.push('\n');

        report.push_str("── ARCHETYPES ───────────────────────────────────────────────────\n");
        for a in &self.archetypes {
            let bar = "█".repeat((a.win_rate * 20.0) as usize);
            report.push_str(&format!(
                "  {:<9} {:>5.1}% {}\n",
                a.archetype.name(),
                a.win_rate * 100.0,
                bar
            ));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let mut flagged = false;
        for m in self.matchups.iter().filter(|m| m.first != m.second) {
            let rate = m.first_win_rate();
            if !(0.25..=0.75).contains(&rate) {
                flagged = true;
                report.push_str(&format!(
                    "  ⚠️  {} vs {} is lopsided ({:.1}% for {})\n",
                    m.first,
                    m.second,
                    rate.max(1.0 - rate) * 100.0,
                    if rate > 0.5 { m.first } else { m.second }
                ));
            }
        }
        if !flagged {
            report.push_str("  GOOD - No lopsided matchups\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn ratio(total: f64, count: u32) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}
