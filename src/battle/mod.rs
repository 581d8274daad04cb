//! Battle engine, events and log rendering.

pub mod engine;
pub mod log;
pub mod types;

pub use engine::{run, Battle};
pub use log::{health_label, render_log};
pub use types::{BattleEvent, BattlePhase, BattleResult, Outcome, Side, TurnRecord};
