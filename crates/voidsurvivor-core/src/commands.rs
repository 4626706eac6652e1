//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All inbound control signals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Craft control ---
    /// Continuous move vector: x = turn (negative = left), y = thrust.
    /// Components are clamped to [-1, 1].
    Move { x: f32, y: f32 },
    /// One fire-trigger press (rising edge).
    Fire,

    // --- Session control ---
    /// Enable the hazard spawner.
    StartSpawning,
    /// Disable the hazard spawner. No spawns are queued while disabled.
    StopSpawning,
    /// Reset the score ledger to zero.
    ResetScore,
}

/// Converts a held fire button into rising edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct FireTrigger {
    held: bool,
}

impl FireTrigger {
    /// Feed the current button level; returns true only on a press.
    pub fn update(&mut self, pressed: bool) -> bool {
        let edge = pressed && !self.held;
        self.held = pressed;
        edge
    }
}
