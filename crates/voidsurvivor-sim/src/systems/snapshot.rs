//! Snapshot system: queries the world and pool and builds a `SimSnapshot`.
//!
//! This system is read-only: it never modifies the world.

use hecs::World;

use voidsurvivor_core::components::*;
use voidsurvivor_core::events::SimEvent;
use voidsurvivor_core::species::SpeciesCatalog;
use voidsurvivor_core::state::*;
use voidsurvivor_core::types::SimTime;

use crate::pool::ProjectilePool;

/// Build a complete snapshot of the current simulation state.
pub fn build_snapshot(
    world: &World,
    catalog: &SpeciesCatalog,
    pool: &ProjectilePool,
    time: &SimTime,
    score: u64,
    spawning: bool,
    events: Vec<SimEvent>,
) -> SimSnapshot {
    let hazards = build_hazards(world, catalog);
    let projectiles = build_projectiles(pool);

    SimSnapshot {
        time: *time,
        craft: build_craft(world),
        counts: EntityCounts {
            live_hazards: hazards.len() as u32,
            active_projectiles: projectiles.len() as u32,
            pooled_projectiles: pool.available() as u32,
            constructed_projectiles: pool.constructed() as u32,
        },
        hazards,
        projectiles,
        score,
        spawning,
        events,
    }
}

fn build_craft(world: &World) -> CraftView {
    world
        .query::<(&Craft, &Position, &Velocity)>()
        .iter()
        .next()
        .map(|(_, (craft, pos, vel))| CraftView {
            position: pos.0,
            orientation: craft.orientation,
            velocity: vel.0,
            speed: vel.0.length(),
        })
        .unwrap_or_default()
}

fn build_hazards(world: &World, catalog: &SpeciesCatalog) -> Vec<HazardView> {
    let mut hazards: Vec<HazardView> = world
        .query::<(&Hazard, &Position)>()
        .iter()
        .filter(|(_, (hazard, _))| !hazard.destroyed)
        .filter_map(|(entity, (hazard, pos))| {
            let species = catalog.get(hazard.species)?;
            Some(HazardView {
                id: entity.to_bits().get(),
                species: species.name.clone(),
                size: species.size,
                position: pos.0,
                rotation: hazard.rotation.to_radians(),
                visual_scale: species.visual_scale,
                radius: species.collision_radius,
                health: hazard.health,
            })
        })
        .collect();

    hazards.sort_by_key(|h| h.id);
    hazards
}

fn build_projectiles(pool: &ProjectilePool) -> Vec<ProjectileView> {
    pool.in_flight()
        .filter(|(_, projectile)| projectile.active)
        .map(|(id, projectile)| ProjectileView {
            slot: id.0,
            position: projectile.position,
            velocity: projectile.velocity,
        })
        .collect()
}
