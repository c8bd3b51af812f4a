//! Warp-speed starfield demo.
//!
//! Stars are simulated on a fixed tick and drawn into an RGBA buffer that is
//! uploaded to a streaming texture every frame. The title bar shows the clock
//! and mouse position.

use invaders::GameResult;
use invaders::config::{DEFAULT_CONFIG_PATH, GameConfig};
use invaders::starfield::{PixelBuffer, Starfield};
use invaders::timestep::FixedTimestep;
use invaders::title::debug_title;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::BlendMode;
use std::time::{Duration, Instant};

const WINDOW_NAME: &str = "Stars";

fn main() -> GameResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::load_or_default(DEFAULT_CONFIG_PATH)?;
    let settings = config.starfield;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window(WINDOW_NAME, settings.width, settings.height)
        .position_centered()
        .build()?;

    let mut canvas = window.into_canvas().build()?;
    let texture_creator = canvas.texture_creator();
    let mut texture =
        texture_creator.create_texture_streaming(PixelFormatEnum::ABGR8888, settings.width, settings.height)?;
    // The buffer leaves alpha at zero, so blending would hide every star
    texture.set_blend_mode(BlendMode::None);

    let mut event_pump = sdl_context.event_pump()?;
    let mut starfield = Starfield::new(&settings, &mut rng);
    let mut pixels = PixelBuffer::new(settings.width, settings.height);
    let mut timestep = FixedTimestep::new(Duration::from_millis(settings.tick_ms.max(1)));

    log::info!(
        "Starfield with {} stars at {}x{}",
        settings.star_count,
        settings.width,
        settings.height
    );

    let mut last_frame = Instant::now();
    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                _ => {}
            }
        }

        let now = Instant::now();
        for _ in 0..timestep.advance(now - last_frame) {
            starfield.update(&mut rng);
        }
        last_frame = now;

        pixels.clear();
        starfield.draw(&mut pixels);
        texture.update(None, pixels.as_bytes(), pixels.pitch())?;

        canvas.clear();
        canvas.copy(&texture, None, None)?;
        canvas.present();

        let mouse = event_pump.mouse_state();
        let title = debug_title(WINDOW_NAME, &chrono::Local::now(), (mouse.x(), mouse.y()));
        if let Err(e) = canvas.window_mut().set_title(&title) {
            log::warn!("Failed to set window title: {}", e);
        }

        std::thread::sleep(timestep.step().saturating_sub(last_frame.elapsed()));
    }

    Ok(())
}
