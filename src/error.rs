//! Error types for combatant creation and battle setup.
//!
//! Every failure is detected before any combatant or battle state is touched,
//! so a returned error never leaves a half-applied mutation behind.

/// Broad category of a [`DuelError`].
///
/// - **InvalidArgument**: the caller passed a value outside the accepted set
///   (unknown archetype, zero max health, blank name).
/// - **InvalidState**: the inputs were well-formed but cannot start a battle
///   (a combatant is already defeated or not at full health).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidState,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid argument",
            Self::InvalidState => "invalid state",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DuelError {
    #[error("unknown archetype `{0}` (expected Precise, Agile, Heavy or Balanced)")]
    UnknownArchetype(String),

    #[error("max health must be positive")]
    ZeroMaxHealth,

    #[error("display name cannot be empty")]
    EmptyName,

    #[error("{name} is already defeated")]
    AlreadyDefeated { name: String },

    #[error("{name} must start at full health ({health}/{max_health})")]
    NotAtFullHealth {
        name: String,
        health: u32,
        max_health: u32,
    },
}

impl DuelError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownArchetype(_) | Self::ZeroMaxHealth | Self::EmptyName => {
                ErrorKind::InvalidArgument
            }
            Self::AlreadyDefeated { .. } | Self::NotAtFullHealth { .. } => ErrorKind::InvalidState,
        }
    }
}

pub type Result<T> = std::result::Result<T, DuelError>;
