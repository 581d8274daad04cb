//! Combatants, their archetypes and the roster factory.

pub mod archetype;
pub mod factory;
pub mod types;

pub use archetype::Archetype;
pub use factory::{create_combatant, roster_combatant};
pub use types::Combatant;
