use invaders::GameResult;
use invaders::config::{DEFAULT_CONFIG_PATH, GameConfig};
use invaders::game::{GameWorld, WorldEvent};
use invaders::input_system::{GameAction, InputSystem};
use invaders::render::{SpriteSet, render_world};
use invaders::save::ScoreStore;
use invaders::timestep::FixedTimestep;
use invaders::title::game_title;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sdl2::messagebox::{MessageBoxFlag, show_simple_message_box};
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::time::Instant;

fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            log::info!("Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// Opens the score store, or runs without high scores if the directory can't be made
fn open_score_store(capacity: usize) -> Option<ScoreStore> {
    let directory = ScoreStore::default_directory();
    match ScoreStore::new(&directory, capacity) {
        Ok(store) => Some(store),
        Err(e) => {
            log::warn!("High scores disabled, can't use {}: {}", directory.display(), e);
            None
        }
    }
}

/// Records the finished game and describes the result for the game-over box
fn record_score(store: Option<&ScoreStore>, score: u32, wave: u32) -> String {
    let mut message = format!("Final score: {}\nReached wave: {}", score, wave);

    let Some(store) = store else {
        return message;
    };

    let result = store.load().and_then(|mut board| {
        let rank = store.record(&mut board, score, wave);
        store.save(&board)?;
        Ok((rank, board.best().map(|entry| entry.score)))
    });

    match result {
        Ok((Some(0), _)) => message.push_str("\n\nNew high score!"),
        Ok((Some(rank), best)) => {
            message.push_str(&format!("\n\nRank #{}", rank + 1));
            if let Some(best) = best {
                message.push_str(&format!(" (best {})", best));
            }
        }
        Ok((None, best)) => {
            if let Some(best) = best {
                message.push_str(&format!("\n\nHigh score: {}", best));
            }
        }
        Err(e) => log::error!("Failed to record score: {}", e),
    }

    message
}

fn show_game_over(canvas: &Canvas<Window>, message: &str) {
    let text = format!("{}\n\nPress R to play again or Esc to quit.", message);
    if let Err(e) = show_simple_message_box(
        MessageBoxFlag::INFORMATION,
        "Game Over",
        &text,
        canvas.window(),
    ) {
        log::warn!("Failed to show game over message: {}", e);
    }
}

fn main() -> GameResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::load_or_default(DEFAULT_CONFIG_PATH)?;
    let rng = create_rng(config.seed);
    let score_store = open_score_store(config.rules.max_high_scores);

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window(&config.window.title, config.window.width, config.window.height)
        .position_centered()
        .build()?;

    let mut canvas = window.into_canvas().build()?;
    canvas.set_logical_size(config.window.width, config.window.height)?;

    let texture_creator = canvas.texture_creator();
    let sprites = SpriteSet::load(&texture_creator, &config.sprites);
    let mut event_pump = sdl_context.event_pump()?;

    let mut timestep = FixedTimestep::from_rate(config.window.tick_rate);
    let mut input = InputSystem::new();
    let mut world = GameWorld::new(config, rng);
    let mut title = String::new();

    log::info!("Starting game at {} ticks per second", world.config().window.tick_rate);

    let mut last_frame = Instant::now();
    'running: loop {
        input.update_context(world.state);
        for action in input.poll_events(&mut event_pump) {
            match action {
                GameAction::Quit => break 'running,
                action => world.apply(action),
            }
            input.update_context(world.state);
        }

        let now = Instant::now();
        let ticks = timestep.advance(now - last_frame);
        last_frame = now;

        let controls = input.controls(&event_pump.keyboard_state());
        let mut game_over = None;
        for _ in 0..ticks {
            for event in world.update(&controls, timestep.step()) {
                match event {
                    WorldEvent::EnemyDestroyed { enemy_id, points } => {
                        log::debug!("Enemy {} destroyed (+{})", enemy_id, points);
                    }
                    WorldEvent::PlayerHit { lives_left } => {
                        log::info!("Player hit, {} lives left", lives_left);
                    }
                    WorldEvent::WaveCleared { wave } => {
                        log::info!("Wave {} cleared", wave);
                    }
                    WorldEvent::GameOver { score, wave } => {
                        log::info!("Game over with {} points on wave {}", score, wave);
                        game_over = Some((score, wave));
                    }
                }
            }
        }

        render_world(&mut canvas, &sprites, &world)?;

        let next_title = game_title(&world);
        if next_title != title {
            if let Err(e) = canvas.window_mut().set_title(&next_title) {
                log::warn!("Failed to set window title: {}", e);
            }
            title = next_title;
        }

        canvas.present();

        if let Some((score, wave)) = game_over {
            let message = record_score(score_store.as_ref(), score, wave);
            show_game_over(&canvas, &message);
            // The message box blocks; don't replay the time it was open
            last_frame = Instant::now();
        }

        let frame_time = last_frame.elapsed();
        std::thread::sleep(timestep.step().saturating_sub(frame_time));
    }

    log::info!("Exiting with score {} on wave {}", world.score, world.wave);
    Ok(())
}
