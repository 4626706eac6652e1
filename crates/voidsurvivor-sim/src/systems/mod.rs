//! Systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over explicitly passed state. They do not
//! own state; the engine does. Run order is fixed by the engine.

pub mod combat;
pub mod craft_movement;
pub mod hazard_movement;
pub mod projectiles;
pub mod snapshot;
pub mod spawner;
pub mod weapon;
pub mod wrap;
