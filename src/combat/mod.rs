//! Attack behaviors.

pub mod attack;

pub use attack::AttackOutcome;
