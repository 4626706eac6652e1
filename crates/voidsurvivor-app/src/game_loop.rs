//! Game loop thread: runs the simulation engine at 60Hz and publishes
//! snapshots.
//!
//! The engine is moved into the thread, which owns it from then on.
//! Commands arrive via `mpsc` channel. Each snapshot replaces the shared
//! latest snapshot, and a status line is logged once per simulated second.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use voidsurvivor_core::constants::TICK_RATE;
use voidsurvivor_core::state::SimSnapshot;
use voidsurvivor_sim::SimulationEngine;

use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    latest_snapshot: SharedSnapshot,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("voidsurvivor-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &std::sync::Mutex<Option<SimSnapshot>>,
) {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    log::info!("Game loop shutting down at tick {}", engine.time().tick);
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

        if snapshot.time.tick % TICK_RATE as u64 == 0 {
            log::info!("{}", status_line(&snapshot));
        }

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind: drop the backlog instead of catching up
            next_tick_time = now;
        }
    }
}

/// One-line summary of a snapshot for the periodic status log.
pub fn status_line(snapshot: &SimSnapshot) -> String {
    let c = &snapshot.counts;
    format!(
        "t={:.1}s score={} hazards={} projectiles={} pool={}/{} craft=({:.2}, {:.2}) speed={:.2}",
        snapshot.time.elapsed_secs,
        snapshot.score,
        c.live_hazards,
        c.active_projectiles,
        c.pooled_projectiles,
        c.constructed_projectiles,
        snapshot.craft.position.x,
        snapshot.craft.position.y,
        snapshot.craft.speed,
    )
}
