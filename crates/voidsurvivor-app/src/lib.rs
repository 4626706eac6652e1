//! Void Survivor headless runner.
//!
//! Drives the simulation on its own thread at a fixed rate, feeds it
//! scripted pilot input over a command channel, and logs status.

pub mod game_loop;
pub mod pilot;
pub mod state;

pub use voidsurvivor_core as core;
