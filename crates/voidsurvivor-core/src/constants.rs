//! Simulation constants and tuning defaults.
//!
//! Most values here are defaults for fields of the runtime configuration.
//! The deadzone, spin range and jitter values have no config field and are
//! read by the systems directly.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Arena ---

/// Arena half-extents (x, y) in world units.
pub const DEFAULT_ARENA_HALF_EXTENTS: [f32; 2] = [10.0, 10.0];

// --- Craft movement ---

/// Craft turn rate (degrees per second at full input).
pub const CRAFT_ROTATION_SPEED: f32 = 300.0;

/// Forward thrust force at full input.
pub const CRAFT_THRUST_FORCE: f32 = 10.0;

/// Speed cap (units per second).
pub const CRAFT_MAX_VELOCITY: f32 = 8.0;

/// Linear drag coefficient ("space friction").
pub const CRAFT_DRAG: f32 = 0.5;

/// Craft mass used to turn thrust force into acceleration.
pub const CRAFT_MASS: f32 = 1.0;

/// Thrust input below this magnitude is ignored.
pub const THRUST_DEADZONE: f32 = 0.1;

// --- Weapon ---

/// Shots per second.
pub const WEAPON_FIRE_RATE: f32 = 4.0;

/// Projectile speed (units per second).
pub const PROJECTILE_SPEED: f32 = 15.0;

/// Damage per projectile hit.
pub const PROJECTILE_DAMAGE: i32 = 10;

/// Seconds a projectile stays in flight before it returns to the pool.
pub const PROJECTILE_LIFETIME: f32 = 2.0;

/// Projectile overlap radius.
pub const PROJECTILE_RADIUS: f32 = 0.05;

/// Distance of the default fire point ahead of the craft origin.
pub const FIRE_POINT_OFFSET: f32 = 0.6;

/// Projectiles constructed up front.
pub const POOL_PREWARM: usize = 20;

// --- Spawning ---

/// Seconds between hazard spawns.
pub const SPAWN_INTERVAL: f32 = 2.0;

/// Maximum magnitude of the random offset added to the inward spawn direction.
pub const SPAWN_DIRECTION_JITTER: f32 = 0.3;

/// Hazards spin at a random rate within ±this (degrees per second).
pub const HAZARD_MAX_SPIN: f32 = 50.0;

/// Per-fragment angular jitter (degrees).
pub const FRAGMENT_ANGLE_JITTER: f32 = 15.0;
