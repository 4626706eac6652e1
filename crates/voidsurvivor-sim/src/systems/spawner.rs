//! Spawn scheduler: emits root-species hazards from the arena edges at a
//! fixed interval while enabled.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidsurvivor_core::constants::SPAWN_DIRECTION_JITTER;
use voidsurvivor_core::events::SimEvent;
use voidsurvivor_core::species::{HazardSpecies, SpeciesCatalog, SpeciesId};
use voidsurvivor_core::types::ArenaBounds;

use crate::world_setup;

/// Timed spawner state.
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    /// Seconds between spawns.
    pub interval: f64,
    /// Species emitted on each spawn.
    pub root: SpeciesId,
    enabled: bool,
    last_spawn: f64,
}

impl SpawnScheduler {
    pub fn new(interval: f64, root: SpeciesId) -> Self {
        Self {
            interval,
            root,
            enabled: false,
            last_spawn: 0.0,
        }
    }

    /// Enable spawning; the interval restarts from `now`.
    pub fn start(&mut self, now: f64) {
        self.enabled = true;
        self.last_spawn = now;
    }

    /// Disable spawning. Nothing accumulates while disabled.
    pub fn stop(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a spawn is due at `now`.
    pub fn due(&self, now: f64) -> bool {
        self.enabled && now - self.last_spawn > self.interval
    }
}

/// Spawn one root hazard if the interval has elapsed.
pub fn run(
    world: &mut World,
    catalog: &SpeciesCatalog,
    scheduler: &mut SpawnScheduler,
    bounds: &ArenaBounds,
    rng: &mut ChaCha8Rng,
    now: f64,
    events: &mut Vec<SimEvent>,
) {
    if !scheduler.due(now) {
        return;
    }
    scheduler.last_spawn = now;

    let Some(species) = catalog.get(scheduler.root) else {
        return;
    };

    let position = random_edge_position(bounds, rng);
    let velocity = inward_velocity(position, bounds, species, rng);

    if world_setup::spawn_hazard(world, catalog, rng, scheduler.root, position, velocity).is_some()
    {
        log::debug!(
            "Spawned {} at ({:.2}, {:.2})",
            species.name,
            position.x,
            position.y
        );
        events.push(SimEvent::HazardSpawned {
            species: species.name.clone(),
            size: species.size,
            position,
            fragment: false,
        });
    }
}

/// A uniformly random point on a uniformly chosen arena edge.
pub fn random_edge_position(bounds: &ArenaBounds, rng: &mut ChaCha8Rng) -> Vec2 {
    let (bx, by) = (bounds.half_extents.x, bounds.half_extents.y);
    match rng.gen_range(0..4) {
        0 => Vec2::new(rng.gen_range(-bx..=bx), by),  // top
        1 => Vec2::new(bx, rng.gen_range(-by..=by)),  // right
        2 => Vec2::new(rng.gen_range(-bx..=bx), -by), // bottom
        _ => Vec2::new(-bx, rng.gen_range(-by..=by)), // left
    }
}

/// Velocity aimed at the arena centre, perturbed by a random offset inside a
/// disk of radius `SPAWN_DIRECTION_JITTER`, at a speed from the species range.
pub fn inward_velocity(
    position: Vec2,
    bounds: &ArenaBounds,
    species: &HazardSpecies,
    rng: &mut ChaCha8Rng,
) -> Vec2 {
    let to_center = (bounds.center() - position).normalize_or_zero();
    let offset = random_in_unit_disk(rng) * SPAWN_DIRECTION_JITTER;
    let direction = (to_center + offset).normalize_or_zero();
    let speed = rng.gen_range(species.min_speed..=species.max_speed);
    direction * speed
}

/// Uniform sample inside the unit disk (rejection sampling).
fn random_in_unit_disk(rng: &mut ChaCha8Rng) -> Vec2 {
    loop {
        let p = Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0));
        if p.length_squared() <= 1.0 {
            return p;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use voidsurvivor_core::components::Hazard;

    fn setup() -> (World, SpeciesCatalog, SpawnScheduler, ArenaBounds, ChaCha8Rng) {
        let catalog = SpeciesCatalog::default_belt();
        let root = catalog.find("Large").unwrap();
        (
            World::new(),
            catalog,
            SpawnScheduler::new(2.0, root),
            ArenaBounds::new(Vec2::new(10.0, 10.0)),
            ChaCha8Rng::seed_from_u64(5),
        )
    }

    fn hazard_count(world: &World) -> usize {
        world.query::<&Hazard>().iter().count()
    }

    #[test]
    fn test_disabled_scheduler_never_spawns() {
        let (mut world, catalog, mut sched, bounds, mut rng) = setup();
        let mut events = Vec::new();
        for i in 0..600 {
            let now = i as f64 / 60.0;
            run(&mut world, &catalog, &mut sched, &bounds, &mut rng, now, &mut events);
        }
        assert_eq!(hazard_count(&world), 0);
    }

    #[test]
    fn test_spawns_once_per_interval() {
        let (mut world, catalog, mut sched, bounds, mut rng) = setup();
        let mut events = Vec::new();
        sched.start(0.0);

        run(&mut world, &catalog, &mut sched, &bounds, &mut rng, 1.99, &mut events);
        assert_eq!(hazard_count(&world), 0);
        run(&mut world, &catalog, &mut sched, &bounds, &mut rng, 2.01, &mut events);
        assert_eq!(hazard_count(&world), 1);
        run(&mut world, &catalog, &mut sched, &bounds, &mut rng, 2.5, &mut events);
        assert_eq!(hazard_count(&world), 1);
        run(&mut world, &catalog, &mut sched, &bounds, &mut rng, 4.02, &mut events);
        assert_eq!(hazard_count(&world), 2);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_restart_resets_interval_without_backlog() {
        let (mut world, catalog, mut sched, bounds, mut rng) = setup();
        let mut events = Vec::new();
        sched.start(0.0);
        sched.stop();

        // Long pause: nothing queued.
        run(&mut world, &catalog, &mut sched, &bounds, &mut rng, 30.0, &mut events);
        assert_eq!(hazard_count(&world), 0);

        sched.start(30.0);
        run(&mut world, &catalog, &mut sched, &bounds, &mut rng, 31.0, &mut events);
        assert_eq!(hazard_count(&world), 0);
        run(&mut world, &catalog, &mut sched, &bounds, &mut rng, 32.1, &mut events);
        assert_eq!(hazard_count(&world), 1);
    }

    #[test]
    fn test_edge_positions_lie_on_an_edge() {
        let (_, _, _, bounds, mut rng) = setup();
        let mut edges_seen = [false; 4];
        for _ in 0..400 {
            let p = random_edge_position(&bounds, &mut rng);
            assert!(bounds.contains(p));
            let on_x = p.x.abs() == 10.0;
            let on_y = p.y.abs() == 10.0;
            assert!(on_x || on_y, "{p:?} is not on an edge");
            if p.y == 10.0 {
                edges_seen[0] = true;
            }
            if p.x == 10.0 {
                edges_seen[1] = true;
            }
            if p.y == -10.0 {
                edges_seen[2] = true;
            }
            if p.x == -10.0 {
                edges_seen[3] = true;
            }
        }
        assert!(edges_seen.iter().all(|&seen| seen));
    }

    #[test]
    fn test_spawn_velocity_points_inward() {
        let (_, catalog, _, bounds, mut rng) = setup();
        let species = catalog.get(catalog.find("Large").unwrap()).unwrap();
        for _ in 0..500 {
            let p = random_edge_position(&bounds, &mut rng);
            let v = inward_velocity(p, &bounds, species, &mut rng);
            assert!(v.dot(-p) > 0.0);
            let speed = v.length();
            assert!(speed >= species.min_speed - 1e-4 && speed <= species.max_speed + 1e-4);
        }
    }

    #[test]
    fn test_unit_disk_samples_stay_inside() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..1000 {
            assert!(random_in_unit_disk(&mut rng).length() <= 1.0 + 1e-6);
        }
    }
}
