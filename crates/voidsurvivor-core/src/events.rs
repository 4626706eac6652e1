//! Events emitted by the simulation for presentation feedback
//! (sound, particles, score popups).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::species::SizeClass;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A hazard entered the simulation (spawner or fragmentation).
    HazardSpawned {
        species: String,
        size: SizeClass,
        position: Vec2,
        fragment: bool,
    },
    /// A projectile hit a hazard that survived.
    HazardDamaged {
        species: String,
        position: Vec2,
        remaining_health: i32,
    },
    /// A hazard's health was exhausted.
    HazardDestroyed {
        species: String,
        size: SizeClass,
        position: Vec2,
        score_awarded: u32,
        fragments: u32,
    },
    /// The craft's weapon launched a projectile.
    ProjectileFired { position: Vec2, direction: Vec2 },
    /// A projectile reached the end of its lifetime without hitting anything.
    ProjectileExpired { position: Vec2 },
    /// The score ledger was reset.
    ScoreReset { previous: u64 },
}
