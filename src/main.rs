//! SKYHOP: a single-screen arcade platformer
//!
//! Bounce from platform to platform; the world scrolls down as you climb.
//! Each platform that drops out of view comes back at the top and is worth
//! a point. Fall below the screen and it's game over.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod assets;
mod config;
mod game;
mod input;
mod logging;

use std::path::Path;
use macroquad::audio::{play_sound, PlaySoundParams};
use macroquad::prelude::*;
use ::rand::rngs::StdRng;
use ::rand::SeedableRng;
use assets::GameAssets;
use config::{GameConfig, CONFIG_PATH};
use game::{draw_game, FpsLimit, Flow, Game, GameEvent};
use input::InputState;
use logging::{init_logging, LoggingConfig};

const WINDOW_TITLE: &str = "Doodle Game!";
const WINDOW_WIDTH: i32 = 500;
const WINDOW_HEIGHT: i32 = 700;

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

/// Seed for the platform generator when the config doesn't fix one
fn seed_from_clock() -> u64 {
    let now = macroquad::miniquad::date::now();
    let secs = now as u64;
    let nanos = (now.fract() * 1e9) as u64;
    // mix seconds and nanos a bit
    secs ^ nanos.rotate_left(32)
}

/// Route simulation events to audio and logs
fn handle_event(event: GameEvent, assets: &GameAssets, volume: f32) {
    if event.plays_jump_sound() {
        play_sound(
            &assets.jump_sound,
            PlaySoundParams {
                looped: false,
                volume,
            },
        );
    }

    match event {
        GameEvent::Bounce { platform } => log::debug!("Bounce off platform {}", platform),
        GameEvent::Recycled { platform, score } => {
            log::debug!("Recycled platform {} (score {})", platform, score)
        }
        GameEvent::GameOver { score } => log::info!("Game over, score {}", score),
        GameEvent::Reset => log::info!("Retry"),
    }
}

/// Hold the frame until its time slot is used up
fn limit_frame_rate(limit: FpsLimit, frame_start: f64) {
    let Some(target_frame_time) = limit.frame_time() else { return };
    let elapsed = get_time() - frame_start;
    if elapsed >= target_frame_time {
        return;
    }

    // Native: use sleep for bulk, then spin-wait for precision
    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002; // 2ms
        while get_time() - frame_start + spin_margin < target_frame_time {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        while get_time() - frame_start < target_frame_time {
            std::hint::spin_loop();
        }
    }
    // WASM: just spin-wait (no thread::sleep available)
    #[cfg(target_arch = "wasm32")]
    {
        while get_time() - frame_start < target_frame_time {}
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    init_logging(LoggingConfig::default());
    log::info!("=== SKYHOP v{} ===", VERSION);

    let config = GameConfig::load_or_default(Path::new(CONFIG_PATH));

    let assets = match GameAssets::load(&config.assets).await {
        Ok(assets) => assets,
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };

    let seed = config.seed.unwrap_or_else(seed_from_clock);
    log::info!("Seed {}, FPS limit {}", seed, config.fps_limit.label());

    let mut game = Game::new(StdRng::seed_from_u64(seed));
    let input = InputState::new();

    loop {
        let frame_start = get_time();

        let flow = game.frame(&input.poll());
        for event in game.events.drain() {
            handle_event(event, &assets, config.sound_volume);
        }
        if flow == Flow::Exit {
            break;
        }

        draw_game(&game, &assets);

        limit_frame_rate(config.fps_limit, frame_start);
        next_frame().await;
    }

    log::info!("Bye");
}
