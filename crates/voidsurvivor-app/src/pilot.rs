//! Scripted input source standing in for a human player.
//!
//! The pilot flies a slow weave: it turns on a sine, thrusts in alternating
//! two-second bursts, and holds the trigger in on/off pulses. The held
//! button goes through a `FireTrigger`, so only presses become `Fire`.

use voidsurvivor_core::commands::{FireTrigger, PlayerCommand};

/// Angular frequency of the weave (radians per second).
const TURN_FREQUENCY: f64 = 0.7;
/// Thrust on for the first half of each period (seconds).
const THRUST_PERIOD: f64 = 4.0;
const THRUST_LEVEL: f32 = 0.6;
/// Trigger button presses per second.
const TRIGGER_RATE: f64 = 5.0;

#[derive(Debug, Default)]
pub struct Pilot {
    trigger: FireTrigger,
}

impl Pilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands for the input sample taken at `elapsed` seconds.
    pub fn sample(&mut self, elapsed: f64) -> Vec<PlayerCommand> {
        let turn = (elapsed * TURN_FREQUENCY).sin() as f32;
        let thrust = if elapsed.rem_euclid(THRUST_PERIOD) < THRUST_PERIOD / 2.0 {
            THRUST_LEVEL
        } else {
            0.0
        };

        let mut commands = vec![PlayerCommand::Move { x: turn, y: thrust }];

        let held = (elapsed * TRIGGER_RATE * 2.0).floor() as u64 % 2 == 0;
        if self.trigger.update(held) {
            commands.push(PlayerCommand::Fire);
        }
        commands
    }
}
