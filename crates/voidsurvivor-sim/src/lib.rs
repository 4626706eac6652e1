//! Simulation engine for Void Survivor.
//!
//! Owns the hecs ECS world, the projectile pool, the score ledger and the
//! spawn scheduler, runs all systems at a fixed tick rate, and produces
//! `SimSnapshot`s for presentation.

pub mod config;
pub mod engine;
pub mod pool;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use voidsurvivor_core as core;
