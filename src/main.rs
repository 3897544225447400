use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use sdl2::keyboard::Keycode;

use trifill::display::{Display, InputEvent, RenderTarget};
use trifill::util::FpsCounter;
use trifill::{FrameDriver, SceneConfig};

/// Frames between FPS log lines
const FPS_LOG_INTERVAL: u64 = 300;

/// trifill - scanline triangle rasterizer
#[derive(Parser, Debug)]
#[command(name = "trifill", version, about = "Software triangle rasterizer presented through SDL2")]
struct Args {
    /// Scene file (JSON). Defaults to the built-in reference scene.
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Write the scene description to this path and exit
    #[arg(long)]
    write_scene: Option<PathBuf>,

    /// Render headless to a PNG file and exit
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Initial window size as a multiple of the buffer size
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=16))]
    scale: u32,

    /// Disable VSync for uncapped framerate
    #[arg(long)]
    no_vsync: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    let scene = match &args.scene {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            info!("No scene file given, using the reference scene");
            SceneConfig::reference()
        },
    };

    if let Some(path) = &args.write_scene {
        scene.save(path)?;
        info!("Scene written to {}", path.display());
        return Ok(());
    }

    let mut driver = FrameDriver::new(scene)?;
    driver.build();

    if let Some(path) = &args.snapshot {
        driver.save_snapshot(path)?;
        return Ok(());
    }

    run_window(&driver, args.scale, !args.no_vsync)
}

fn run_window(driver: &FrameDriver, scale: u32, vsync: bool) -> Result<()> {
    let buffer = driver.buffer();
    let (width, height) = (buffer.width(), buffer.height());

    let (mut display, texture_creator) =
        Display::with_options("trifill", width * scale, height * scale, vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, width, height)?;

    let mut fps_counter = FpsCounter::new(60);
    let mut frames: u64 = 0;

    info!("Escape or close the window to quit");

    'main: loop {
        for event in display.poll_events() {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Keycode::Escape) => break 'main,
                InputEvent::Resized { width, height } => {
                    debug!("Window resized to {}x{}", width, height);
                },
                InputEvent::KeyDown(_) => {},
            }
        }

        display.present(&mut target, buffer)?;

        let avg_fps = fps_counter.tick();
        frames += 1;
        if frames % FPS_LOG_INTERVAL == 0 {
            let (min_fps, max_fps) = fps_counter.min_max_fps();
            debug!(
                "{:.0} fps avg, {:.0} min, {:.0} max, {:.2}ms",
                avg_fps,
                min_fps,
                max_fps,
                fps_counter.avg_frame_time_ms()
            );
        }
    }

    info!("Presented {} frames", frames);
    Ok(())
}
