//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ARENA_HALF_EXTENTS, TICK_RATE};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        1.0 / TICK_RATE as f64
    }

    /// Advance by one tick.
    ///
    /// Elapsed time is recomputed from the tick count rather than summed,
    /// so interval comparisons never accumulate rounding drift.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs = self.tick as f64 * self.dt();
    }
}

/// Rectangular toroidal play area, centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    /// Half-width (x) and half-height (y) of the arena.
    pub half_extents: Vec2,
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self::new(Vec2::from(DEFAULT_ARENA_HALF_EXTENTS))
    }
}

impl ArenaBounds {
    pub fn new(half_extents: Vec2) -> Self {
        Self { half_extents }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// True when the point lies within the bounds (edges inclusive).
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x.abs() <= self.half_extents.x && pos.y.abs() <= self.half_extents.y
    }

    /// Toroidal wrap. A coordinate past one edge teleports to the opposite
    /// edge exactly; overshoot distance is discarded. Axes are independent.
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            wrap_axis(pos.x, self.half_extents.x),
            wrap_axis(pos.y, self.half_extents.y),
        )
    }
}

fn wrap_axis(value: f32, bound: f32) -> f32 {
    if value > bound {
        -bound
    } else if value < -bound {
        bound
    } else {
        value
    }
}

/// Unit facing vector for an orientation in radians.
/// Orientation 0 faces +y; positive angles turn counter-clockwise.
pub fn forward(angle: f32) -> Vec2 {
    Vec2::new(-angle.sin(), angle.cos())
}

/// Rotate a vector counter-clockwise by `angle` radians.
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}
