//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Game logic lives in systems, not components. Projectiles are not
//! entities; they are owned by the projectile pool.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::species::SpeciesId;

/// World-space position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Linear velocity (units per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Marks an entity as subject to toroidal boundary wrapping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Wraps;

/// Tunable movement constants for the player craft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CraftTuning {
    /// Degrees per second at full turn input (100–500).
    pub rotation_speed: f32,
    /// Thrust force at full input (5–20).
    pub thrust_force: f32,
    /// Speed cap (3–15).
    pub max_velocity: f32,
    /// Linear drag coefficient (0–2).
    pub drag: f32,
    pub mass: f32,
}

impl Default for CraftTuning {
    fn default() -> Self {
        Self {
            rotation_speed: CRAFT_ROTATION_SPEED,
            thrust_force: CRAFT_THRUST_FORCE,
            max_velocity: CRAFT_MAX_VELOCITY,
            drag: CRAFT_DRAG,
            mass: CRAFT_MASS,
        }
    }
}

/// The player-controlled craft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Craft {
    /// Orientation in radians; 0 faces +y, positive is counter-clockwise.
    pub orientation: f32,
    pub tuning: CraftTuning,
}

/// A destructible drifting hazard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hazard {
    pub species: SpeciesId,
    /// Remaining health; the hazard is destroyed once this reaches 0 or below.
    pub health: i32,
    /// Spin rate in degrees per second.
    pub angular_velocity: f32,
    /// Current rotation in degrees (presentation only).
    pub rotation: f32,
    /// Set on the Alive → Destroyed transition; despawned at end of tick.
    pub destroyed: bool,
}
