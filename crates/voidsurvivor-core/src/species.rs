//! Hazard species: immutable per-kind parameter records.
//!
//! Records are authored by name (`SpeciesDef`) and resolved into a
//! `SpeciesCatalog` where fragment references become `SpeciesId`s.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Hazard size class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    #[default]
    Large,
    Medium,
    Small,
}

/// Index of a species within its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpeciesId(pub u32);

/// Resolved, immutable description of one class of hazard.
///
/// Ranges are preconditions, not checked: `collision_radius` 0.1–5.0,
/// `mass` 0.5–10.0, `0 < min_speed <= max_speed`, `health` 1–100,
/// `score_value` 1–20, `fragment_count` 0–5.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HazardSpecies {
    pub name: String,
    pub size: SizeClass,
    pub visual_scale: Vec2,
    pub collision_radius: f32,
    pub mass: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub health: i32,
    pub score_value: u32,
    pub can_fragment: bool,
    pub fragment_count: u32,
    pub fragment_species: Option<SpeciesId>,
}

impl HazardSpecies {
    /// Fragment species and count, if this species actually fragments.
    ///
    /// A species flagged as fragmentable but missing a fragment species or
    /// with a zero count produces no fragments.
    pub fn fragment_rule(&self) -> Option<(SpeciesId, u32)> {
        if !self.can_fragment || self.fragment_count == 0 {
            return None;
        }
        self.fragment_species.map(|id| (id, self.fragment_count))
    }
}

/// Authoring format for a species record (JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesDef {
    pub name: String,
    #[serde(default)]
    pub size: SizeClass,
    #[serde(default = "default_visual_scale")]
    pub visual_scale: Vec2,
    pub collision_radius: f32,
    pub mass: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub health: i32,
    pub score_value: u32,
    #[serde(default)]
    pub can_fragment: bool,
    #[serde(default)]
    pub fragment_count: u32,
    /// Name of the species spawned as fragments.
    #[serde(default)]
    pub fragment_species: Option<String>,
}

fn default_visual_scale() -> Vec2 {
    Vec2::ONE
}

/// All hazard species known to a simulation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpeciesCatalog {
    species: Vec<HazardSpecies>,
}

impl SpeciesCatalog {
    /// Resolve authored records. Fragment names that match no record are
    /// dropped with a warning; the species then simply does not fragment.
    pub fn from_defs(defs: Vec<SpeciesDef>) -> Self {
        let names: Vec<String> = defs.iter().map(|d| d.name.clone()).collect();

        let species = defs
            .into_iter()
            .map(|def| {
                let fragment_species = def.fragment_species.as_deref().and_then(|wanted| {
                    let found = names.iter().position(|n| n == wanted);
                    if found.is_none() {
                        log::warn!(
                            "species '{}' fragments into unknown species '{}'; fragmentation disabled",
                            def.name,
                            wanted
                        );
                    }
                    found.map(|idx| SpeciesId(idx as u32))
                });

                HazardSpecies {
                    name: def.name,
                    size: def.size,
                    visual_scale: def.visual_scale,
                    collision_radius: def.collision_radius,
                    mass: def.mass,
                    min_speed: def.min_speed,
                    max_speed: def.max_speed,
                    health: def.health,
                    score_value: def.score_value,
                    can_fragment: def.can_fragment,
                    fragment_count: def.fragment_count,
                    fragment_species,
                }
            })
            .collect();

        Self { species }
    }

    /// The default asteroid belt: Large → 3× Medium → 2× Small each.
    pub fn default_belt() -> Self {
        Self::from_defs(default_belt_defs())
    }

    pub fn get(&self, id: SpeciesId) -> Option<&HazardSpecies> {
        self.species.get(id.0 as usize)
    }

    /// Look up a species id by name.
    pub fn find(&self, name: &str) -> Option<SpeciesId> {
        self.species
            .iter()
            .position(|s| s.name == name)
            .map(|idx| SpeciesId(idx as u32))
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpeciesId, &HazardSpecies)> {
        self.species
            .iter()
            .enumerate()
            .map(|(idx, s)| (SpeciesId(idx as u32), s))
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

/// Authored records for the default belt.
pub fn default_belt_defs() -> Vec<SpeciesDef> {
    vec![
        SpeciesDef {
            name: "Large".into(),
            size: SizeClass::Large,
            visual_scale: Vec2::splat(2.0),
            collision_radius: 1.0,
            mass: 3.0,
            min_speed: 1.0,
            max_speed: 3.0,
            health: 30,
            score_value: 10,
            can_fragment: true,
            fragment_count: 3,
            fragment_species: Some("Medium".into()),
        },
        SpeciesDef {
            name: "Medium".into(),
            size: SizeClass::Medium,
            visual_scale: Vec2::splat(1.2),
            collision_radius: 0.6,
            mass: 1.5,
            min_speed: 1.5,
            max_speed: 4.0,
            health: 20,
            score_value: 15,
            can_fragment: true,
            fragment_count: 2,
            fragment_species: Some("Small".into()),
        },
        SpeciesDef {
            name: "Small".into(),
            size: SizeClass::Small,
            visual_scale: Vec2::splat(0.6),
            collision_radius: 0.3,
            mass: 0.5,
            min_speed: 2.0,
            max_speed: 5.0,
            health: 10,
            score_value: 20,
            can_fragment: false,
            fragment_count: 0,
            fragment_species: None,
        },
    ]
}
