//! Duel - Turn-Based Two-Combatant Battle Simulator
//!
//! Two roster combatants trade blows in alternating turns until one of them
//! drops to zero health. Every random draw goes through an injected
//! [`RollSource`], so a seeded battle is fully reproducible.
//!
//! ```no_run
//! use duel::{battle, create_combatant};
//!
//! let first = create_combatant("Heavy", "Ann")?;
//! let second = create_combatant("Precise", "Bea")?;
//! let result = battle::run(first, second, rand::thread_rng())?;
//! print!("{}", battle::render_log(&result.events));
//! # Ok::<(), duel::DuelError>(())
//! ```

pub mod battle;
pub mod build_info;
pub mod combat;
pub mod combatant;
pub mod core;
pub mod error;
pub mod simulator;

pub use battle::{Battle, BattleEvent, BattlePhase, BattleResult, Outcome, Side, TurnRecord};
pub use combat::AttackOutcome;
pub use combatant::{create_combatant, roster_combatant, Archetype, Combatant};
pub use crate::core::rolls::{RollSource, ScriptedRolls};
pub use error::{DuelError, ErrorKind, Result};
