// Precise: steady hits, no special rule
pub const PRECISE_DAMAGE_MIN: u32 = 15;
pub const PRECISE_DAMAGE_MAX: u32 = 25;
pub const PRECISE_MAX_HEALTH: u32 = 100;

// Agile: light hits with a chance to crit
pub const AGILE_DAMAGE_MIN: u32 = 10;
pub const AGILE_DAMAGE_MAX: u32 = 18;
pub const AGILE_CRIT_CHANCE: f64 = 0.2;
pub const AGILE_CRIT_MULTIPLIER: u32 = 2;
pub const AGILE_MAX_HEALTH: u32 = 110;

// Heavy: big hits that sometimes whiff entirely
pub const HEAVY_DAMAGE_MIN: u32 = 20;
pub const HEAVY_DAMAGE_MAX: u32 = 30;
pub const HEAVY_MISS_CHANCE: f64 = 0.1;
pub const HEAVY_MAX_HEALTH: u32 = 120;

// Balanced: medium hits, sometimes patches itself up afterwards
pub const BALANCED_DAMAGE_MIN: u32 = 12;
pub const BALANCED_DAMAGE_MAX: u32 = 22;
pub const BALANCED_HEAL_CHANCE: f64 = 0.3;
pub const BALANCED_HEAL_MIN: u32 = 5;
pub const BALANCED_HEAL_MAX: u32 = 10;
pub const BALANCED_MAX_HEALTH: u32 = 105;

// Presentation pacing used by the terminal driver, never by the engine
pub const DEFAULT_TURN_DELAY_MS: u64 = 600;
