//! Simulation snapshot: the complete presentation-facing state after each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::events::SimEvent;
use crate::species::SizeClass;
use crate::types::SimTime;

/// Everything a renderer or HUD needs, produced once per tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub craft: CraftView,
    pub hazards: Vec<HazardView>,
    pub projectiles: Vec<ProjectileView>,
    pub score: u64,
    pub counts: EntityCounts,
    pub spawning: bool,
    pub events: Vec<SimEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CraftView {
    pub position: Vec2,
    /// Radians; 0 faces +y.
    pub orientation: f32,
    pub velocity: Vec2,
    pub speed: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardView {
    /// Stable entity handle (hecs entity bits).
    pub id: u64,
    pub species: String,
    pub size: SizeClass,
    pub position: Vec2,
    /// Radians, same convention as `CraftView::orientation`.
    pub rotation: f32,
    pub visual_scale: Vec2,
    pub radius: f32,
    pub health: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub slot: u32,
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Live/active counts for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCounts {
    pub live_hazards: u32,
    pub active_projectiles: u32,
    pub pooled_projectiles: u32,
    pub constructed_projectiles: u32,
}
