//! Human-readable battle log lines.

use std::fmt;

use super::types::{BattleEvent, Outcome, TurnRecord};
use crate::combatant::Combatant;

impl fmt::Display for TurnRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} attacks {} and deals {} damage.",
            self.actor_name, self.target_name, self.damage
        )?;
        if self.critical {
            f.write_str(" Critical hit!")?;
        }
        if self.missed {
            f.write_str(" Missed!")?;
        }
        if self.self_heal > 0 {
            write!(f, " {} recovers {} health.", self.actor_name, self.self_heal)?;
        }
        Ok(())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner { name, .. } => f.write_str(name),
            Outcome::Draw => f.write_str("No one, it's a draw!"),
        }
    }
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEvent::Attack(record) => fmt::Display::fmt(record, f),
            BattleEvent::Finished { outcome } => write!(f, "Battle ended! Winner: {}", outcome),
        }
    }
}

/// `"Health: 85 / 120"`
pub fn health_label(combatant: &Combatant) -> String {
    format!(
        "Health: {} / {}",
        combatant.health(),
        combatant.max_health()
    )
}

/// Full log as text, one line per event with a blank line before the result.
pub fn render_log(events: &[BattleEvent]) -> String {
    let mut text = String::new();
    for event in events {
        if matches!(event, BattleEvent::Finished { .. }) {
            text.push('\n');
        }
        text.push_str(&event.to_string());
        text.push('\n');
    }
    text
}
