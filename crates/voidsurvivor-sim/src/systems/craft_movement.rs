//! Craft flight model: turn, deadzoned thrust, linear drag, speed clamp,
//! then position integration.

use glam::Vec2;
use hecs::World;

use voidsurvivor_core::components::{Craft, CraftTuning, Position, Velocity};
use voidsurvivor_core::constants::THRUST_DEADZONE;
use voidsurvivor_core::types::forward;

/// Advance every craft by one tick using the current move input
/// (x = turn, y = thrust, each in [-1, 1]).
pub fn run(world: &mut World, input: Vec2, dt: f32) {
    for (_entity, (craft, pos, vel)) in
        world.query_mut::<(&mut Craft, &mut Position, &mut Velocity)>()
    {
        let (orientation, velocity) =
            integrate(craft.orientation, vel.0, &craft.tuning, input, dt);
        craft.orientation = orientation;
        vel.0 = velocity;
        pos.0 += velocity * dt;
    }
}

/// One tick of craft kinematics. Returns the new (orientation, velocity).
///
/// Leftward (negative x) input yields positive rotation. Speed after the
/// step never exceeds `tuning.max_velocity`.
pub fn integrate(
    orientation: f32,
    velocity: Vec2,
    tuning: &CraftTuning,
    input: Vec2,
    dt: f32,
) -> (f32, Vec2) {
    let turn = -input.x;
    let orientation = orientation + (turn * tuning.rotation_speed * dt).to_radians();

    let mut velocity = velocity;
    let thrust = input.y;
    if thrust.abs() > THRUST_DEADZONE {
        let force = forward(orientation) * (thrust * tuning.thrust_force);
        velocity += force / tuning.mass * dt;
    }

    velocity /= 1.0 + tuning.drag * dt;
    velocity = clamp_speed(velocity, tuning.max_velocity);

    (orientation, velocity)
}

/// Rescale `velocity` to `max` if it is faster, preserving direction.
pub fn clamp_speed(velocity: Vec2, max: f32) -> Vec2 {
    velocity.clamp_length_max(max)
}
