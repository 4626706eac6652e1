use std::process::ExitCode;
use std::time::{Duration, Instant};

use voidsurvivor_app::game_loop;
use voidsurvivor_app::pilot::Pilot;
use voidsurvivor_app::state::{shared_snapshot, GameLoopCommand};
use voidsurvivor_core::commands::PlayerCommand;
use voidsurvivor_sim::config::SimConfig;
use voidsurvivor_sim::SimulationEngine;

/// Rate at which the pilot samples input.
const INPUT_INTERVAL: Duration = Duration::from_millis(20);
const DEFAULT_RUN_SECS: f64 = 30.0;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Void Survivor starting up");

    // Usage: voidsurvivor [config.json] [seconds]
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match SimConfig::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {path}");
                config
            }
            Err(e) => {
                log::error!("Fatal error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => SimConfig::default(),
    };
    let run_secs = args
        .next()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(DEFAULT_RUN_SECS);

    let engine = match SimulationEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("Fatal error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let latest = shared_snapshot();
    let (tx, handle) = match game_loop::spawn_game_loop(engine, latest.clone()) {
        Ok(spawned) => spawned,
        Err(e) => {
            log::error!("Failed to spawn game loop thread: {e}");
            return ExitCode::FAILURE;
        }
    };

    let _ = tx.send(GameLoopCommand::Player(PlayerCommand::StartSpawning));

    let mut pilot = Pilot::new();
    let started = Instant::now();
    'run: loop {
        let elapsed = started.elapsed().as_secs_f64();
        if elapsed >= run_secs {
            break;
        }
        for command in pilot.sample(elapsed) {
            if tx.send(GameLoopCommand::Player(command)).is_err() {
                log::warn!("Game loop exited early");
                break 'run;
            }
        }
        std::thread::sleep(INPUT_INTERVAL);
    }

    let _ = tx.send(GameLoopCommand::Shutdown);
    if handle.join().is_err() {
        log::error!("Game loop thread panicked");
        return ExitCode::FAILURE;
    }

    if let Ok(lock) = latest.lock() {
        if let Some(snapshot) = lock.as_ref() {
            log::info!("Final: {}", game_loop::status_line(snapshot));
            match serde_json::to_string(snapshot) {
                Ok(json) => log::debug!("Final snapshot: {json}"),
                Err(e) => log::warn!("Failed to serialize final snapshot: {e}"),
            }
        }
    }
    ExitCode::SUCCESS
}
