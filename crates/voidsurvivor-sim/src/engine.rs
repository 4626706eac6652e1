//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs world together with the projectile pool,
//! score ledger, spawn scheduler and weapon, processes player commands, runs
//! all systems in a fixed order, and produces `SimSnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use voidsurvivor_core::commands::PlayerCommand;
use voidsurvivor_core::components::Hazard;
use voidsurvivor_core::constants::DT;
use voidsurvivor_core::error::ConfigResult;
use voidsurvivor_core::events::SimEvent;
use voidsurvivor_core::species::{SpeciesCatalog, SpeciesId};
use voidsurvivor_core::state::SimSnapshot;
use voidsurvivor_core::types::{ArenaBounds, SimTime};

use crate::config::SimConfig;
use crate::pool::{ProjectileId, ProjectilePool};
use crate::score::ScoreLedger;
use crate::systems;
use crate::systems::combat::{CombatContext, PendingFragment};
use crate::systems::spawner::SpawnScheduler;
use crate::systems::weapon::Weapon;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    bounds: ArenaBounds,
    catalog: SpeciesCatalog,
    rng: ChaCha8Rng,
    craft: hecs::Entity,

    // --- Shared resources ---
    pool: ProjectilePool,
    score: ScoreLedger,
    spawner: SpawnScheduler,
    weapon: Weapon,

    // --- Input ---
    command_queue: VecDeque<PlayerCommand>,
    move_input: Vec2,
    fire_requested: bool,

    // --- Per-tick scratch ---
    pending_fragments: Vec<PendingFragment>,
    despawn_buffer: Vec<hecs::Entity>,
    flight_buffer: Vec<ProjectileId>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> ConfigResult<Self> {
        let (catalog, root) = config.build_catalog()?;

        let mut world = World::new();
        let craft = world_setup::spawn_craft(&mut world, config.craft);

        let mut spawner = SpawnScheduler::new(config.spawn_interval as f64, root);
        if config.spawning_at_start {
            spawner.start(0.0);
        }

        log::info!(
            "Simulation started: seed {}, arena {}x{}, {} species, pool {}",
            config.seed,
            config.arena_half_extents.x * 2.0,
            config.arena_half_extents.y * 2.0,
            catalog.len(),
            config.pool_prewarm
        );

        Ok(Self {
            world,
            time: SimTime::default(),
            bounds: ArenaBounds::new(config.arena_half_extents),
            catalog,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            craft,
            pool: ProjectilePool::with_prewarm(config.pool_prewarm),
            score: ScoreLedger::default(),
            spawner,
            weapon: Weapon::new(config.weapon),
            command_queue: VecDeque::new(),
            move_input: Vec2::ZERO,
            fire_requested: false,
            pending_fragments: Vec::new(),
            despawn_buffer: Vec::new(),
            flight_buffer: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        self.process_commands();
        self.time.advance();
        self.run_systems();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.catalog,
            &self.pool,
            &self.time,
            self.score.total(),
            self.spawner.is_enabled(),
            events,
        )
    }

    /// Place a hazard directly, bypassing the spawner (scripted scenarios).
    pub fn spawn_hazard(
        &mut self,
        species: SpeciesId,
        position: Vec2,
        velocity: Vec2,
    ) -> Option<hecs::Entity> {
        let entity = world_setup::spawn_hazard(
            &mut self.world,
            &self.catalog,
            &mut self.rng,
            species,
            position,
            velocity,
        )?;
        if let Some(record) = self.catalog.get(species) {
            self.events.push(SimEvent::HazardSpawned {
                species: record.name.clone(),
                size: record.size,
                position,
                fragment: false,
            });
        }
        Some(entity)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Current score total.
    pub fn score(&self) -> u64 {
        self.score.total()
    }

    pub fn pool(&self) -> &ProjectilePool {
        &self.pool
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn catalog(&self) -> &SpeciesCatalog {
        &self.catalog
    }

    pub fn bounds(&self) -> &ArenaBounds {
        &self.bounds
    }

    /// The craft entity.
    pub fn craft(&self) -> hecs::Entity {
        self.craft
    }

    pub fn spawning(&self) -> bool {
        self.spawner.is_enabled()
    }

    /// Number of live hazards.
    pub fn hazard_count(&self) -> usize {
        self.world
            .query::<&Hazard>()
            .iter()
            .filter(|(_, hazard)| !hazard.destroyed)
            .count()
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Move { x, y } => {
                self.move_input = Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0));
            }
            PlayerCommand::Fire => {
                self.fire_requested = true;
            }
            PlayerCommand::StartSpawning => {
                if !self.spawner.is_enabled() {
                    self.spawner.start(self.time.elapsed_secs);
                    log::info!("Spawning enabled at {:.2}s", self.time.elapsed_secs);
                }
            }
            PlayerCommand::StopSpawning => {
                if self.spawner.is_enabled() {
                    self.spawner.stop();
                    log::info!("Spawning disabled at {:.2}s", self.time.elapsed_secs);
                }
            }
            PlayerCommand::ResetScore => {
                let previous = self.score.reset();
                self.events.push(SimEvent::ScoreReset { previous });
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now = self.time.elapsed_secs;

        // 1. Movement integration
        systems::craft_movement::run(&mut self.world, self.move_input, DT);
        systems::hazard_movement::run(&mut self.world, DT);
        // 2. Boundary wrap (craft + hazards)
        systems::wrap::run(&mut self.world, &self.bounds);
        // 3. Weapon
        systems::weapon::run(
            &self.world,
            &mut self.weapon,
            &mut self.pool,
            std::mem::take(&mut self.fire_requested),
            now,
            &mut self.events,
        );
        // 4. Projectiles: flight, expiry, hits
        let mut ctx = CombatContext {
            catalog: &self.catalog,
            score: &mut self.score,
            rng: &mut self.rng,
            pending: &mut self.pending_fragments,
            events: &mut self.events,
        };
        systems::projectiles::run(
            &mut self.world,
            &mut self.pool,
            &mut self.flight_buffer,
            self.weapon.config.projectile_radius,
            now,
            DT,
            &mut ctx,
        );
        // 5. Despawn destroyed hazards, spawn queued fragments
        systems::combat::flush(
            &mut self.world,
            &self.catalog,
            &mut self.rng,
            &mut self.pending_fragments,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        // 6. Spawner
        systems::spawner::run(
            &mut self.world,
            &self.catalog,
            &mut self.spawner,
            &self.bounds,
            &mut self.rng,
            now,
            &mut self.events,
        );
    }
}
