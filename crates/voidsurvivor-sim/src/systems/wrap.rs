//! Boundary wrapper: toroidal wrap for the craft and every hazard.
//! Projectiles do not wrap; they expire by lifetime.

use hecs::World;

use voidsurvivor_core::components::{Position, Wraps};
use voidsurvivor_core::types::ArenaBounds;

pub fn run(world: &mut World, bounds: &ArenaBounds) {
    for (_entity, (_wraps, pos)) in world.query_mut::<(&Wraps, &mut Position)>() {
        pos.0 = bounds.wrap(pos.0);
    }
}
