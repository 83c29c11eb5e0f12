//! Arena Shooter entry point
//!
//! Runs a headless session driven by the autopilot:
//!
//! ```text
//! arena-shooter [tuning.json] [seed]
//! ```

fn main() -> std::process::ExitCode {
    use std::process::ExitCode;

    use arena_shooter::Tuning;
    use arena_shooter::consts::{ARENA_HEIGHT, ARENA_WIDTH};
    use arena_shooter::renderer::{scene, tessellate_all};
    use arena_shooter::sim::{Arena, GameState, autopilot, tick};

    // Five minutes at 60 Hz
    const MAX_TICKS: u64 = 5 * 60 * 60;

    env_logger::init();
    log::info!("Arena Shooter (native) starting...");

    let mut args = std::env::args().skip(1);

    let tuning = match args.next() {
        Some(path) => {
            let loaded = std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()));
            match loaded {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path);
                    tuning
                }
                Err(e) => {
                    log::error!("Could not load tuning from {}: {}", path, e);
                    return ExitCode::FAILURE;
                }
            }
        }
        None => Tuning::default(),
    };

    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::error!("Invalid seed: {}", e);
            return ExitCode::FAILURE;
        }
        None => std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0),
    };

    let mut state = match GameState::new(Arena::new(ARENA_WIDTH, ARENA_HEIGHT), tuning, seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Invalid tuning: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("Game initialized with seed: {}", seed);

    let mut peak_vertices = 0;
    while !state.is_game_over() && state.time_ticks < MAX_TICKS {
        let input = autopilot(&state);
        tick(&mut state, &input);

        let vertices = tessellate_all(&scene(&state, input.target));
        peak_vertices = peak_vertices.max(vertices.len());

        if state.time_ticks % 600 == 0 {
            log::info!(
                "tick {}: health={} enemies={} projectiles={} kills={}",
                state.time_ticks,
                state.player.health,
                state.enemies.len(),
                state.player.projectiles.len(),
                state.kills
            );
        }
    }

    let summary = serde_json::json!({
        "seed": seed,
        "ticks": state.time_ticks,
        "kills": state.kills,
        "health": state.player.health,
        "game_over": state.is_game_over(),
        "peak_vertices": peak_vertices,
    });
    println!("{summary}");

    ExitCode::SUCCESS
}
