//! Projectile flight: advance, expire, and detect hazard overlap.
//!
//! Each in-flight projectile is returned to the pool on exactly one path
//! per flight: lifetime expiry or its first hit.

use hecs::{Entity, World};

use voidsurvivor_core::components::{Hazard, Position};
use voidsurvivor_core::events::SimEvent;
use voidsurvivor_core::species::SpeciesCatalog;

use crate::pool::{ProjectileId, ProjectilePool};
use crate::systems::combat::{self, CombatContext};

/// Advance every in-flight projectile by `dt` and resolve expiry and hits.
///
/// `flight_buffer` is scratch space reused across ticks.
pub fn run(
    world: &mut World,
    pool: &mut ProjectilePool,
    flight_buffer: &mut Vec<ProjectileId>,
    projectile_radius: f32,
    now: f64,
    dt: f32,
    ctx: &mut CombatContext,
) {
    flight_buffer.clear();
    flight_buffer.extend(pool.in_flight().map(|(id, _)| id));

    for &id in flight_buffer.iter() {
        let Some(projectile) = pool.get_mut(id) else {
            continue;
        };
        projectile.position += projectile.velocity * dt;

        if projectile.expired(now) {
            let position = projectile.position;
            pool.release(id);
            ctx.events.push(SimEvent::ProjectileExpired { position });
            continue;
        }

        let position = projectile.position;
        let damage = projectile.damage;

        if let Some(target) = find_target(world, ctx.catalog, position, projectile_radius) {
            combat::apply_hit(world, target, damage, ctx);
            pool.release(id);
        }
    }
}

/// The closest live hazard whose collision circle overlaps a projectile at
/// `position`, if any.
pub fn find_target(
    world: &World,
    catalog: &SpeciesCatalog,
    position: glam::Vec2,
    projectile_radius: f32,
) -> Option<Entity> {
    let mut best: Option<(Entity, f32)> = None;

    for (entity, (hazard, pos)) in world.query::<(&Hazard, &Position)>().iter() {
        if hazard.destroyed {
            continue;
        }
        let Some(species) = catalog.get(hazard.species) else {
            continue;
        };
        let distance = pos.0.distance(position);
        if distance > species.collision_radius + projectile_radius {
            continue;
        }
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((entity, distance));
        }
    }

    best.map(|(entity, _)| entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::score::ScoreLedger;
    use crate::systems::combat::PendingFragment;
    use crate::world_setup;

    const DT: f32 = 0.1;

    fn launch(pool: &mut ProjectilePool, position: Vec2, direction: Vec2, now: f64) -> ProjectileId {
        let id = pool.acquire();
        pool.get_mut(id)
            .unwrap()
            .launch(position, direction, 10.0, 10, 2.0, now);
        id
    }

    struct Harness {
        world: World,
        catalog: SpeciesCatalog,
        pool: ProjectilePool,
        score: ScoreLedger,
        rng: ChaCha8Rng,
        pending: Vec<PendingFragment>,
        events: Vec<SimEvent>,
        buffer: Vec<ProjectileId>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                world: World::new(),
                catalog: SpeciesCatalog::default_belt(),
                pool: ProjectilePool::with_prewarm(4),
                score: ScoreLedger::default(),
                rng: ChaCha8Rng::seed_from_u64(3),
                pending: Vec::new(),
                events: Vec::new(),
                buffer: Vec::new(),
            }
        }

        fn step(&mut self, now: f64) {
            let mut ctx = CombatContext {
                catalog: &self.catalog,
                score: &mut self.score,
                rng: &mut self.rng,
                pending: &mut self.pending,
                events: &mut self.events,
            };
            run(
                &mut self.world,
                &mut self.pool,
                &mut self.buffer,
                0.05,
                now,
                DT,
                &mut ctx,
            );
        }

        fn hazard(&mut self, name: &str, position: Vec2) -> Entity {
            let id = self.catalog.find(name).unwrap();
            world_setup::spawn_hazard(
                &mut self.world,
                &self.catalog,
                &mut self.rng,
                id,
                position,
                Vec2::ZERO,
            )
            .unwrap()
        }
    }

    #[test]
    fn test_projectile_expires_after_lifetime() {
        let mut h = Harness::new();
        let id = launch(&mut h.pool, Vec2::ZERO, Vec2::X, 0.0);

        for i in 1..=19 {
            let now = i as f64 * 0.1;
            h.step(now);
            assert!(h.pool.is_in_flight(id), "still in flight at {now}");
        }
        h.step(2.15);
        assert!(!h.pool.is_in_flight(id));
        assert_eq!(h.pool.available(), 4);
        assert!(matches!(h.events.last(), Some(SimEvent::ProjectileExpired { .. })));
    }

    #[test]
    fn test_projectile_is_single_use_on_hit() {
        let mut h = Harness::new();
        let target = h.hazard("Large", Vec2::new(0.0, 1.0));
        let id = launch(&mut h.pool, Vec2::ZERO, Vec2::Y, 0.0);

        h.step(0.1);
        assert!(!h.pool.is_in_flight(id), "released on first hit");
        assert_eq!(h.world.get::<&Hazard>(target).unwrap().health, 20);
        assert_eq!(h.pool.available(), 4);
    }

    #[test]
    fn test_projectiles_do_not_wrap() {
        let mut h = Harness::new();
        let id = launch(&mut h.pool, Vec2::new(9.9, 0.0), Vec2::X, 0.0);
        h.step(0.1);
        h.step(0.2);
        assert!(h.pool.get(id).unwrap().position.x > 10.0);
    }

    #[test]
    fn test_nearest_overlapping_hazard_takes_the_hit() {
        let mut h = Harness::new();
        let far = h.hazard("Large", Vec2::new(0.0, 1.9));
        let near = h.hazard("Large", Vec2::new(0.0, 1.2));
        launch(&mut h.pool, Vec2::ZERO, Vec2::Y, 0.0);

        h.step(0.1);
        assert_eq!(h.world.get::<&Hazard>(near).unwrap().health, 20);
        assert_eq!(h.world.get::<&Hazard>(far).unwrap().health, 30);
    }

    #[test]
    fn test_dead_hazard_is_not_hit_again_in_same_tick() {
        let mut h = Harness::new();
        let small = h.hazard("Small", Vec2::new(0.0, 1.0));
        let a = launch(&mut h.pool, Vec2::ZERO, Vec2::Y, 0.0);
        let b = launch(&mut h.pool, Vec2::new(0.01, 0.0), Vec2::Y, 0.0);

        h.step(0.1);
        assert!(h.world.get::<&Hazard>(small).unwrap().destroyed);
        assert!(!h.pool.is_in_flight(a));
        assert!(h.pool.is_in_flight(b), "second projectile flies on");
        assert_eq!(h.score.total(), 20);
    }
}
