//! Simulation constants and tuning parameters.

/// Engine tick rate (Hz). One tick is one movement step (50 ms).
pub const TICK_RATE: u32 = 20;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Play surface ---

/// Play surface extent in normalized percent units (both axes).
pub const SURFACE_EXTENT: f64 = 100.0;

/// Vertical coordinate at which a monster leaves play.
pub const DESPAWN_Y: f64 = 90.0;

// --- Spawning ---

/// Maximum simultaneous monsters. A spawn tick at the cap is a no-op.
pub const POPULATION_CAP: usize = 5;

/// Ticks between spawn attempts (3000 ms at 20 Hz).
pub const SPAWN_INTERVAL_TICKS: u64 = 60;

/// Horizontal spawn band.
pub const SPAWN_X_MIN: f64 = 10.0;
pub const SPAWN_X_MAX: f64 = 90.0;

/// Vertical spawn band, near the top of the play surface.
pub const SPAWN_Y_MIN: f64 = 10.0;
pub const SPAWN_Y_MAX: f64 = 30.0;

/// Health assigned to every monster at spawn.
pub const MONSTER_MAX_HEALTH: f64 = 100.0;

/// Downward drift range, percent-of-height per tick.
pub const FALL_SPEED_MIN: f64 = 0.5;
pub const FALL_SPEED_MAX: f64 = 1.0;

// --- Combat ---

/// Maximum distance between a shot and a monster for the shot to count,
/// in percent units.
pub const HIT_RADIUS: f64 = 8.0;

/// Session score awarded per monster destroyed.
pub const KILL_SCORE: u32 = 100;

// --- Reload ---

/// Ticks from reload trigger to magazine restore (2000 ms at 20 Hz).
pub const RELOAD_DURATION_TICKS: u64 = 40;

// --- Kill rewards (reported to the progression store) ---

pub const REWARD_KILLS: u32 = 1;
pub const REWARD_EXPERIENCE: u32 = 50;
pub const REWARD_COINS: u32 = 10;

// --- Progression ---

/// Coins a fresh player profile starts with.
pub const STARTING_COINS: u32 = 1000;

/// Experience required per player level.
pub const EXPERIENCE_PER_LEVEL: u32 = 500;
