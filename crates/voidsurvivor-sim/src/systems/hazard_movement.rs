//! Hazard drift: constant linear velocity and constant spin.
//!
//! Nothing in the simulation applies forces to hazards.

use hecs::World;

use voidsurvivor_core::components::{Hazard, Position, Velocity};

pub fn run(world: &mut World, dt: f32) {
    for (_entity, (hazard, pos, vel)) in world.query_mut::<(&mut Hazard, &mut Position, &Velocity)>()
    {
        pos.0 += vel.0 * dt;
        hazard.rotation = (hazard.rotation + hazard.angular_velocity * dt).rem_euclid(360.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use voidsurvivor_core::species::SpeciesId;

    #[test]
    fn test_hazards_drift_in_straight_lines() {
        let mut world = World::new();
        let e = world.spawn((
            Hazard {
                species: SpeciesId(0),
                health: 30,
                angular_velocity: 45.0,
                rotation: 0.0,
                destroyed: false,
            },
            Position(Vec2::ZERO),
            Velocity(Vec2::new(2.0, -1.0)),
        ));

        for _ in 0..10 {
            run(&mut world, 0.1);
        }

        let pos = world.get::<&Position>(e).unwrap().0;
        assert!((pos - Vec2::new(2.0, -1.0)).length() < 1e-5);
        assert_eq!(world.get::<&Velocity>(e).unwrap().0, Vec2::new(2.0, -1.0));
        let rotation = world.get::<&Hazard>(e).unwrap().rotation;
        assert!((rotation - 45.0).abs() < 1e-3);
    }
}
