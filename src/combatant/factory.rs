//! Builds combatants from the roster.

use super::archetype::Archetype;
use super::types::Combatant;
use crate::error::{DuelError, Result};

/// Creates a roster combatant for a player.
///
/// `archetype_name` may be an archetype (`"Heavy"`) or a roster label
/// (`"LanceBackend"`). The combatant is named `"<display name> (<label>)"`
/// and starts at the roster character's max health.
pub fn create_combatant(archetype_name: &str, display_name: &str) -> Result<Combatant> {
    let archetype: Archetype = archetype_name.parse()?;
    let display_name = display_name.trim();
    if display_name.is_empty() {
        return Err(DuelError::EmptyName);
    }
    let name = format!("{} ({})", display_name, archetype.roster_label());
    let combatant = Combatant::new(name, archetype, archetype.default_max_health())?;
    tracing::debug!(
        name = combatant.name(),
        archetype = %archetype,
        max_health = combatant.max_health(),
        "created combatant"
    );
    Ok(combatant)
}

/// Roster character under its own label, with no player name attached.
pub fn roster_combatant(archetype: Archetype) -> Combatant {
    Combatant::from_roster(archetype)
}
