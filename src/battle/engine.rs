//! Turn-based battle engine.
//!
//! A [`Battle`] owns both combatants and the roll source for the duration of
//! one fight. It can be driven in two equivalent ways:
//!
//! 1. **Run to completion** ([`run`]) - plays every turn and returns the
//!    full [`BattleResult`].
//! 2. **Step-wise** ([`Battle::advance_one_turn`]) - yields one event per
//!    call so a driver can pace or animate the fight. Stopping early needs
//!    no cleanup.
//!
//! Both modes append to the same log in the same order, so for the same
//! inputs and roll sequence they produce identical events. The engine never
//! sleeps or reads the clock.

use super::types::{BattleEvent, BattlePhase, BattleResult, Outcome, Side, TurnRecord};
use crate::combatant::Combatant;
use crate::core::rolls::RollSource;
use crate::error::{DuelError, Result};

pub struct Battle<R> {
    combatants: [Combatant; 2],
    rolls: R,
    phase: BattlePhase,
    turns_taken: u32,
    events: Vec<BattleEvent>,
    /// Number of events already handed out by `advance_one_turn`.
    emitted: usize,
}

impl<R: RollSource> Battle<R> {
    /// Sets up a battle. Both combatants must be undefeated and at full
    /// health; nothing is mutated when validation fails.
    pub fn new(first: Combatant, second: Combatant, rolls: R) -> Result<Self> {
        ensure_ready(&first)?;
        ensure_ready(&second)?;
        Ok(Self {
            combatants: [first, second],
            rolls,
            phase: BattlePhase::NotStarted,
            turns_taken: 0,
            events: Vec::new(),
            emitted: 0,
        })
    }

    pub fn phase(&self) -> &BattlePhase {
        &self.phase
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, BattlePhase::Finished(_))
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.phase {
            BattlePhase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn turns_taken(&self) -> u32 {
        self.turns_taken
    }

    /// Side that acts next, or `None` once the battle is over.
    pub fn next_actor(&self) -> Option<Side> {
        (!self.is_finished()).then(|| Side::for_turn(self.turns_taken + 1))
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    pub fn combatants(&self) -> &[Combatant; 2] {
        &self.combatants
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Returns the next event of the battle, playing a turn if needed.
    ///
    /// Each turn yields one `Attack` event. The call after the deciding turn
    /// yields the `Finished` event without playing a turn; every call after
    /// that returns `None`.
    pub fn advance_one_turn(&mut self) -> Option<BattleEvent> {
        if self.emitted == self.events.len() {
            if self.is_finished() {
                return None;
            }
            self.play_turn();
        }
        let event = self.events.get(self.emitted).cloned();
        self.emitted += 1;
        event
    }

    /// Consumes a finished battle. Returns `None` if it is still running.
    pub fn into_result(self) -> Option<BattleResult> {
        let BattlePhase::Finished(outcome) = self.phase else {
            return None;
        };
        Some(BattleResult {
            events: self.events,
            outcome,
            combatants: self.combatants,
        })
    }

    fn play_turn(&mut self) {
        if self.phase == BattlePhase::NotStarted {
            self.phase = BattlePhase::InProgress;
            tracing::debug!(
                first = self.combatants[0].name(),
                second = self.combatants[1].name(),
                "battle started"
            );
        }

        self.turns_taken += 1;
        let turn = self.turns_taken;
        let actor_side = Side::for_turn(turn);

        let [first, second] = &mut self.combatants;
        let (actor, target) = match actor_side {
            Side::First => (first, second),
            Side::Second => (second, first),
        };

        let attack = actor.attack(&mut self.rolls);
        target.take_damage(attack.damage);
        actor.heal(attack.self_heal);

        tracing::debug!(
            turn,
            actor = actor.name(),
            target = target.name(),
            damage = attack.damage,
            critical = attack.critical,
            missed = attack.missed,
            self_heal = attack.self_heal,
            target_health = target.health(),
            "turn resolved"
        );

        self.events.push(BattleEvent::Attack(TurnRecord {
            turn,
            actor: actor_side,
            actor_name: actor.name().to_string(),
            target_name: target.name().to_string(),
            damage: attack.damage,
            critical: attack.critical,
            missed: attack.missed,
            self_heal: attack.self_heal,
            actor_health: actor.health(),
            target_health: target.health(),
        }));

        if let Some(outcome) = decide(&self.combatants) {
            tracing::info!(
                turns = turn,
                winner = outcome.winner_name().unwrap_or("draw"),
                "battle finished"
            );
            self.events.push(BattleEvent::Finished {
                outcome: outcome.clone(),
            });
            self.phase = BattlePhase::Finished(outcome);
        }
    }
}

/// Plays a battle to completion.
///
/// Terminates as long as the roll source keeps producing hits, which every
/// uniform source does with probability 1.
pub fn run<R: RollSource>(first: Combatant, second: Combatant, rolls: R) -> Result<BattleResult> {
    let mut battle = Battle::new(first, second, rolls)?;
    loop {
        if let BattlePhase::Finished(outcome) = battle.phase {
            return Ok(BattleResult {
                events: battle.events,
                outcome,
                combatants: battle.combatants,
            });
        }
        battle.play_turn();
    }
}

fn ensure_ready(combatant: &Combatant) -> Result<()> {
    if combatant.is_defeated() {
        return Err(DuelError::AlreadyDefeated {
            name: combatant.name().to_string(),
        });
    }
    if !combatant.is_fresh() {
        return Err(DuelError::NotAtFullHealth {
            name: combatant.name().to_string(),
            health: combatant.health(),
            max_health: combatant.max_health(),
        });
    }
    Ok(())
}

/// `None` while both combatants stand.
fn decide(combatants: &[Combatant; 2]) -> Option<Outcome> {
    let [first, second] = combatants;
    match (first.is_defeated(), second.is_defeated()) {
        (false, false) => None,
        (false, true) => Some(Outcome::Winner {
            side: Side::First,
            name: first.name().to_string(),
        }),
        (true, false) => Some(Outcome::Winner {
            side: Side::Second,
            name: second.name().to_string(),
        }),
        (true, true) => Some(Outcome::Draw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::Archetype;
    use crate::core::rolls::ScriptedRolls;
    use crate::error::ErrorKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fighter(name: &str, archetype: Archetype, max_health: u32) -> Combatant {
        Combatant::new(name, archetype, max_health).unwrap()
    }

    #[test]
    fn test_new_rejects_defeated_combatant() {
        let mut down = fighter("Down", Archetype::Precise, 10);
        down.take_damage(10);
        let up = fighter("Up", Archetype::Precise, 10);

        let err = Battle::new(up, down, ScriptedRolls::default())
            .err()
            .unwrap();
        assert_eq!(
            err,
            DuelError::AlreadyDefeated {
                name: "Down".into()
            }
        );
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_new_rejects_wounded_combatant() {
        let mut hurt = fighter("Hurt", Archetype::Agile, 50);
        hurt.take_damage(5);
        let err = run(hurt, fighter("Up", Archetype::Agile, 50), ScriptedRolls::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_phases() {
        let mut battle = Battle::new(
            fighter("A", Archetype::Precise, 30),
            fighter("B", Archetype::Precise, 30),
            ScriptedRolls::new([20, 20, 20], [0.0_f64; 0]),
        )
        .unwrap();
        assert_eq!(battle.phase(), &BattlePhase::NotStarted);
        assert_eq!(battle.next_actor(), Some(Side::First));

        battle.advance_one_turn();
        assert_eq!(battle.phase(), &BattlePhase::InProgress);
        assert_eq!(battle.next_actor(), Some(Side::Second));

        battle.advance_one_turn();
        battle.advance_one_turn();
        // A has hit B twice for 40 total
        assert!(battle.is_finished());
        assert_eq!(battle.next_actor(), None);
        assert_eq!(battle.outcome().and_then(Outcome::winner_side), Some(Side::First));
    }

    #[test]
    fn test_step_stream_ends_with_finished_then_none() {
        let mut battle = Battle::new(
            fighter("A", Archetype::Precise, 15),
            fighter("B", Archetype::Precise, 15),
            ScriptedRolls::new([15], [0.0_f64; 0]),
        )
        .unwrap();

        let first = battle.advance_one_turn().unwrap();
        assert_eq!(first.as_turn().map(|t| t.target_health), Some(0));
        assert!(matches!(
            battle.advance_one_turn(),
            Some(BattleEvent::Finished { .. })
        ));
        assert_eq!(battle.advance_one_turn(), None);
        assert_eq!(battle.advance_one_turn(), None);
        assert_eq!(battle.turns_taken(), 1);
    }

    #[test]
    fn test_self_heal_applied_to_actor() {
        // A (Balanced) hits B for 12 and heals 5; B (Precise) hits A for 15;
        // A hits for 12 with a heal of 10, capped at max health.
        let rolls = ScriptedRolls::new([12, 5, 15, 12, 10, 25, 22], [0.1, 0.1, 0.9]);
        let mut battle = Battle::new(
            fighter("A", Archetype::Balanced, 100),
            fighter("B", Archetype::Precise, 40),
            rolls,
        )
        .unwrap();

        let t1 = battle.advance_one_turn().unwrap();
        let t1 = t1.as_turn().unwrap();
        assert_eq!((t1.damage, t1.self_heal, t1.actor_health), (12, 5, 100));

        let t2 = battle.advance_one_turn().unwrap();
        assert_eq!(t2.as_turn().unwrap().target_health, 85);

        let t3 = battle.advance_one_turn().unwrap();
        let t3 = t3.as_turn().unwrap();
        assert_eq!((t3.self_heal, t3.actor_health, t3.target_health), (10, 95, 16));
    }

    #[test]
    fn test_into_result_requires_finish() {
        let battle = Battle::new(
            fighter("A", Archetype::Heavy, 50),
            fighter("B", Archetype::Heavy, 50),
            ChaCha8Rng::seed_from_u64(1),
        )
        .unwrap();
        assert!(battle.into_result().is_none());
    }

    #[test]
    fn test_step_and_run_agree() {
        let make = || {
            (
                fighter("A", Archetype::Agile, 110),
                fighter("B", Archetype::Balanced, 105),
            )
        };

        let (a, b) = make();
        let expected = run(a, b, ChaCha8Rng::seed_from_u64(99)).unwrap();

        let (a, b) = make();
        let mut battle = Battle::new(a, b, ChaCha8Rng::seed_from_u64(99)).unwrap();
        let mut streamed = Vec::new();
        while let Some(event) = battle.advance_one_turn() {
            streamed.push(event);
        }

        assert_eq!(streamed, expected.events);
        assert_eq!(battle.into_result().unwrap(), expected);
    }

    #[test]
    fn test_decide() {
        let alive = fighter("A", Archetype::Precise, 10);
        let mut dead = fighter("B", Archetype::Precise, 10);
        dead.take_damage(10);
        assert_eq!(decide(&[alive.clone(), alive.clone()]), None);
        assert_eq!(
            decide(&[dead.clone(), alive.clone()]).and_then(|o| o.winner_side()),
            Some(Side::Second)
        );
        assert_eq!(decide(&[dead.clone(), dead]), Some(Outcome::Draw));
    }
}
