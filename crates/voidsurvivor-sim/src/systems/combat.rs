//! Combat resolution: damage, destruction, score and fragmentation.
//!
//! Destruction marks the hazard dead and queues its fragments; nothing is
//! spawned or despawned until [`flush`] runs after the tick's projectile
//! pass, so iteration never sees a half-updated world.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidsurvivor_core::components::{Hazard, Position};
use voidsurvivor_core::constants::FRAGMENT_ANGLE_JITTER;
use voidsurvivor_core::events::SimEvent;
use voidsurvivor_core::species::{HazardSpecies, SpeciesCatalog, SpeciesId};
use voidsurvivor_core::types::rotate;

use crate::score::ScoreLedger;
use crate::world_setup;

/// A fragment waiting to be spawned at the end of the tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingFragment {
    pub species: SpeciesId,
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Result of a single hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// The hazard survived with this much health.
    Damaged { remaining: i32 },
    /// The hazard was destroyed.
    Destroyed { score: u32, fragments: u32 },
    /// The target was already dead or gone.
    Ignored,
}

/// Shared mutable state a hit may touch.
pub struct CombatContext<'a> {
    pub catalog: &'a SpeciesCatalog,
    pub score: &'a mut ScoreLedger,
    pub rng: &'a mut ChaCha8Rng,
    pub pending: &'a mut Vec<PendingFragment>,
    pub events: &'a mut Vec<SimEvent>,
}

/// Apply `damage` to `target`. On the Alive → Destroyed transition the
/// score is awarded and fragments are queued, exactly once.
pub fn apply_hit(
    world: &mut World,
    target: Entity,
    damage: i32,
    ctx: &mut CombatContext,
) -> HitOutcome {
    let catalog = ctx.catalog;
    let Ok((hazard, pos)) = world.query_one_mut::<(&mut Hazard, &Position)>(target) else {
        return HitOutcome::Ignored;
    };
    if hazard.destroyed {
        return HitOutcome::Ignored;
    }
    let Some(species) = catalog.get(hazard.species) else {
        return HitOutcome::Ignored;
    };

    hazard.health -= damage;

    if hazard.health > 0 {
        ctx.events.push(SimEvent::HazardDamaged {
            species: species.name.clone(),
            position: pos.0,
            remaining_health: hazard.health,
        });
        return HitOutcome::Damaged {
            remaining: hazard.health,
        };
    }

    hazard.destroyed = true;
    ctx.score.add(species.score_value);

    let mut fragments = 0;
    if let Some((fragment_id, count)) = species.fragment_rule() {
        if let Some(fragment_species) = catalog.get(fragment_id) {
            for velocity in fragment_velocities(count, fragment_species, ctx.rng) {
                ctx.pending.push(PendingFragment {
                    species: fragment_id,
                    position: pos.0,
                    velocity,
                });
            }
            fragments = count;
        }
    }

    log::debug!(
        "{} destroyed at ({:.2}, {:.2}), {} fragments",
        species.name,
        pos.0.x,
        pos.0.y,
        fragments
    );

    ctx.events.push(SimEvent::HazardDestroyed {
        species: species.name.clone(),
        size: species.size,
        position: pos.0,
        score_awarded: species.score_value,
        fragments,
    });

    HitOutcome::Destroyed {
        score: species.score_value,
        fragments,
    }
}

/// Fan `count` fragment velocities evenly around a full circle, each
/// jittered by ±`FRAGMENT_ANGLE_JITTER` degrees, rotated from +y, with speed
/// sampled from the fragment species' range.
pub fn fragment_velocities(
    count: u32,
    fragment: &HazardSpecies,
    rng: &mut ChaCha8Rng,
) -> Vec<Vec2> {
    if count == 0 {
        return Vec::new();
    }
    let step = 360.0 / count as f32;
    (0..count)
        .map(|i| {
            let angle = step * i as f32
                + rng.gen_range(-FRAGMENT_ANGLE_JITTER..=FRAGMENT_ANGLE_JITTER);
            let direction = rotate(Vec2::Y, angle.to_radians());
            let speed = rng.gen_range(fragment.min_speed..=fragment.max_speed);
            direction * speed
        })
        .collect()
}

/// End-of-tick bookkeeping: despawn destroyed hazards, then spawn the
/// queued fragments.
pub fn flush(
    world: &mut World,
    catalog: &SpeciesCatalog,
    rng: &mut ChaCha8Rng,
    pending: &mut Vec<PendingFragment>,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) {
    despawn_buffer.clear();
    for (entity, hazard) in world.query_mut::<&Hazard>() {
        if hazard.destroyed {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for fragment in pending.drain(..) {
        let spawned = world_setup::spawn_hazard(
            world,
            catalog,
            rng,
            fragment.species,
            fragment.position,
            fragment.velocity,
        );
        if spawned.is_some() {
            if let Some(species) = catalog.get(fragment.species) {
                events.push(SimEvent::HazardSpawned {
                    species: species.name.clone(),
                    size: species.size,
                    position: fragment.position,
                    fragment: true,
                });
            }
        }
    }
}
