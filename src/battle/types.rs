use serde::{Deserialize, Serialize};

use crate::combatant::Combatant;

/// Which of the two combatants. `First` always opens the battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    /// Side acting on the given 1-based turn.
    pub fn for_turn(turn: u32) -> Side {
        if turn % 2 == 1 {
            Side::First
        } else {
            Side::Second
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Winner { side: Side, name: String },
    /// Both combatants at zero health. Only one combatant takes damage per
    /// turn, so the engine never produces this.
    Draw,
}

impl Outcome {
    pub fn winner_side(&self) -> Option<Side> {
        match self {
            Outcome::Winner { side, .. } => Some(*side),
            Outcome::Draw => None,
        }
    }

    pub fn winner_name(&self) -> Option<&str> {
        match self {
            Outcome::Winner { name, .. } => Some(name),
            Outcome::Draw => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattlePhase {
    NotStarted,
    InProgress,
    Finished(Outcome),
}

/// Everything that happened on one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn index.
    pub turn: u32,
    pub actor: Side,
    pub actor_name: String,
    pub target_name: String,
    pub damage: u32,
    pub critical: bool,
    pub missed: bool,
    /// Health the actor restored to itself after the hit.
    pub self_heal: u32,
    /// Actor health after the self-heal.
    pub actor_health: u32,
    /// Target health after the damage.
    pub target_health: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BattleEvent {
    Attack(TurnRecord),
    Finished { outcome: Outcome },
}

impl BattleEvent {
    pub fn as_turn(&self) -> Option<&TurnRecord> {
        match self {
            BattleEvent::Attack(record) => Some(record),
            BattleEvent::Finished { .. } => None,
        }
    }
}

/// Completed battle: the full event log, the outcome and both combatants as
/// they ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BattleResult {
    pub events: Vec<BattleEvent>,
    pub outcome: Outcome,
    pub combatants: [Combatant; 2],
}

impl BattleResult {
    pub fn turns(&self) -> impl Iterator<Item = &TurnRecord> {
        self.events.iter().filter_map(BattleEvent::as_turn)
    }

    pub fn turn_count(&self) -> u32 {
        self.turns().count() as u32
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    pub fn winner(&self) -> Option<&Combatant> {
        self.outcome.winner_side().map(|side| self.combatant(side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_alternates_by_turn() {
        assert_eq!(Side::for_turn(1), Side::First);
        assert_eq!(Side::for_turn(2), Side::Second);
        assert_eq!(Side::for_turn(7), Side::First);
        assert_eq!(Side::First.opponent(), Side::Second);
        assert_eq!(Side::Second.index(), 1);
    }

    #[test]
    fn test_outcome_accessors() {
        let win = Outcome::Winner {
            side: Side::Second,
            name: "Bea".into(),
        };
        assert_eq!(win.winner_side(), Some(Side::Second));
        assert_eq!(win.winner_name(), Some("Bea"));
        assert_eq!(Outcome::Draw.winner_name(), None);
    }

    #[test]
    fn test_event_serializes_with_kind_tag() {
        let event = BattleEvent::Finished {
            outcome: Outcome::Draw,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"kind\":\"finished\""));
        let back: BattleEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
