//! Entity spawn factories for the simulation world.
//!
//! Creates the craft and hazard entities with their component bundles.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidsurvivor_core::components::*;
use voidsurvivor_core::constants::HAZARD_MAX_SPIN;
use voidsurvivor_core::species::{SpeciesCatalog, SpeciesId};

/// Spawn the player's craft at the arena centre, at rest, facing +y.
pub fn spawn_craft(world: &mut World, tuning: CraftTuning) -> hecs::Entity {
    world.spawn((
        Craft {
            orientation: 0.0,
            tuning,
        },
        Position(Vec2::ZERO),
        Velocity(Vec2::ZERO),
        Wraps,
    ))
}

/// Spawn a hazard of `species` with an explicit position and velocity.
/// Health comes from the species; spin is random within ±`HAZARD_MAX_SPIN`.
///
/// Returns `None` when the species id is not in the catalog.
pub fn spawn_hazard(
    world: &mut World,
    catalog: &SpeciesCatalog,
    rng: &mut ChaCha8Rng,
    species: SpeciesId,
    position: Vec2,
    velocity: Vec2,
) -> Option<hecs::Entity> {
    let record = catalog.get(species)?;

    let hazard = Hazard {
        species,
        health: record.health,
        angular_velocity: rng.gen_range(-HAZARD_MAX_SPIN..=HAZARD_MAX_SPIN),
        rotation: 0.0,
        destroyed: false,
    };

    Some(world.spawn((hazard, Position(position), Velocity(velocity), Wraps)))
}
