//! Shared constants and the random roll source.

pub mod constants;
pub mod rolls;

pub use constants::*;
pub use rolls::{RollSource, ScriptedRolls};
