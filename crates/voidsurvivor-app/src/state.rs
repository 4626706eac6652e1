//! State shared between the runner's main thread and the game loop thread.

use std::sync::{Arc, Mutex};

use voidsurvivor_core::commands::PlayerCommand;
use voidsurvivor_core::state::SimSnapshot;

/// Commands sent from the input side to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the game loop after each tick and read by
/// whoever presents it.
pub type SharedSnapshot = Arc<Mutex<Option<SimSnapshot>>>;

pub fn shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_snapshot_starts_empty() {
        let shared = shared_snapshot();
        assert!(shared.lock().unwrap().is_none());
    }
}
