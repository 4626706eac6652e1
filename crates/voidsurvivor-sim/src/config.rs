//! Runtime configuration for a simulation session.
//!
//! [`SimConfig`] defaults mirror `voidsurvivor_core::constants`. A JSON file
//! may override any subset of fields; missing keys keep their defaults.
//! Values outside their documented ranges are the caller's responsibility.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use voidsurvivor_core::components::CraftTuning;
use voidsurvivor_core::constants::*;
use voidsurvivor_core::error::{ConfigError, ConfigResult};
use voidsurvivor_core::species::{SpeciesCatalog, SpeciesDef, SpeciesId};

/// Where projectiles leave the craft, relative to its origin and facing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FirePoint {
    /// Offset in the craft's local frame (+y is ahead).
    pub offset: Vec2,
    /// Extra facing angle relative to the craft (radians).
    #[serde(default)]
    pub angle: f32,
}

impl Default for FirePoint {
    fn default() -> Self {
        Self {
            offset: Vec2::new(0.0, FIRE_POINT_OFFSET),
            angle: 0.0,
        }
    }
}

/// Weapon and projectile tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    /// Shots per second.
    pub fire_rate: f32,
    pub projectile_speed: f32,
    pub damage: i32,
    /// Seconds in flight before a projectile returns to the pool.
    pub lifetime: f32,
    pub projectile_radius: f32,
    /// `None` uses a point `FIRE_POINT_OFFSET` ahead of the craft.
    pub fire_point: Option<FirePoint>,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            fire_rate: WEAPON_FIRE_RATE,
            projectile_speed: PROJECTILE_SPEED,
            damage: PROJECTILE_DAMAGE,
            lifetime: PROJECTILE_LIFETIME,
            projectile_radius: PROJECTILE_RADIUS,
            fire_point: None,
        }
    }
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed. Same seed and same commands = same simulation.
    pub seed: u64,
    pub arena_half_extents: Vec2,
    pub craft: CraftTuning,
    pub weapon: WeaponConfig,
    /// Projectiles constructed at startup.
    pub pool_prewarm: usize,
    /// Seconds between spawns.
    pub spawn_interval: f32,
    /// Start with the spawner enabled at t = 0.
    pub spawning_at_start: bool,
    /// Species the spawner emits.
    pub root_species: String,
    /// Species records. Empty uses the default belt.
    pub species: Vec<SpeciesDef>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            arena_half_extents: Vec2::from(DEFAULT_ARENA_HALF_EXTENTS),
            craft: CraftTuning::default(),
            weapon: WeaponConfig::default(),
            pool_prewarm: POOL_PREWARM,
            spawn_interval: SPAWN_INTERVAL,
            spawning_at_start: false,
            root_species: "Large".into(),
            species: Vec::new(),
        }
    }
}

impl SimConfig {
    /// Parse a (possibly partial) JSON configuration.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Resolve the species catalog and the spawner's root species.
    pub fn build_catalog(&self) -> ConfigResult<(SpeciesCatalog, SpeciesId)> {
        let catalog = if self.species.is_empty() {
            SpeciesCatalog::default_belt()
        } else {
            SpeciesCatalog::from_defs(self.species.clone())
        };

        let root = catalog
            .find(&self.root_species)
            .ok_or_else(|| ConfigError::UnknownSpecies {
                name: self.root_species.clone(),
            })?;

        Ok((catalog, root))
    }
}
