//! Simulation constants and tuning parameters.

// --- World ---

/// World width in world units. Spawn columns are the integers `0..WORLD_WIDTH`.
pub const WORLD_WIDTH: u32 = 9;

/// World height in world units. Entities spawn at the top edge.
pub const WORLD_HEIGHT: f32 = 16.0;

/// Maximum delta time the caller may pass into a tick. Clamping a slow
/// frame to this bound keeps integration and damage per tick bounded.
pub const MAX_DELTA_TIME: f32 = 1.0 / 20.0;

// --- Player ---

/// Player ship start x position.
pub const PLAYER_START_X: f32 = 4.2;

/// Player ship start y position.
pub const PLAYER_START_Y: f32 = 8.0;

/// Maximum (and starting) life.
pub const MAX_LIFE: f32 = 100.0;

/// Maximum shield. Players start with none.
pub const MAX_SHIELD: f32 = 100.0;

// --- Damage ---

/// Height of the hazard band at the world floor. Players at or below this
/// y take continuous damage.
pub const DAMAGE_AREA_HEIGHT: f32 = 2.0;

/// Damage applied per second inside the hazard band.
pub const DAMAGE_PER_SECOND: f32 = 25.0;

/// Removal delay after death, long enough for the explosion to play.
pub const DEATH_EXPLOSION_DELAY: f32 = 0.9;

// --- Input ---

/// Dead zone around the ship center for pointer-derived facing, in world
/// units. Tolerance against input jitter.
pub const TOUCH_TOLERANCE: f32 = 0.2;

/// Dead zone for accelerometer-derived facing.
pub const TILT_TOLERANCE: f32 = 0.35;

/// Laser shots per second while the fire input is held.
pub const LASER_FIRE_RATE: f32 = 2.0;

/// Seconds between obstacle spawns while firing.
pub const OBSTACLE_SPAWN_INTERVAL: f32 = 3.0;

/// Lasers at or above this y are culled.
pub const PROJECTILE_CEILING_Y: f32 = 16.0;

/// Laser vertical speed.
pub const LASER_SPEED: f32 = 25.0;

/// Obstacle fall speed.
pub const OBSTACLE_FALL_SPEED: f32 = -4.5;

// --- Power-ups ---

/// Shortest delay between spawn cycles.
pub const MIN_SPAWN_INTERVAL: f32 = 0.9;

/// Longest delay between spawn cycles.
pub const MAX_SPAWN_INTERVAL: f32 = 1.5;

/// Power-ups spawn at the top edge of the world.
pub const POWER_UP_SPAWN_Y: f32 = 16.0;

/// Power-up fall speed.
pub const POWER_UP_FALL_SPEED: f32 = -8.75;

/// Vertical speed gained from a small boost.
pub const BOOST_1_SPEED_GAIN: f32 = 3.0;

/// Vertical speed gained from a large boost.
pub const BOOST_2_SPEED_GAIN: f32 = 3.75;

/// Life restored by a life pickup, clamped to `max_life`.
pub const LIFE_GAIN: f32 = 25.0;

/// Shield charged by a shield pickup, clamped to `max_shield`.
pub const SHIELD_GAIN: f32 = 25.0;

/// Power-ups at or below this y were missed and are culled.
pub const MISSED_PICKUP_Y: f32 = 1.0;
