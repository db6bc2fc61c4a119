//! Headless railband driver.
//!
//! Renders the scene on the CPU raster surface for a fixed number of
//! frames, firing the spawn/prune interval timers between draws and
//! exporting PNG artifacts along the way. Trigger events (reset, toggle,
//! resize) are scheduled by frame index from the command line.

mod export;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use railband_engine::coords::Viewport;
use railband_engine::logging::{LoggingConfig, init_logging};
use railband_engine::render::RasterSurface;
use railband_engine::rng::ChaChaRandom;
use railband_engine::scene::{Scene, SceneConfig};
use railband_engine::time::{FrameClock, IntervalTimer};

/// Abstract time units advanced per rendered frame (60 fps equivalent,
/// matching the cadence the spawn/prune periods were tuned against).
const UNITS_PER_FRAME: u64 = 16;

#[derive(Debug)]
struct Args {
    width: u32,
    height: u32,
    frames: u64,
    out_dir: PathBuf,
    seed: Option<u64>,
    save_every: u64,
    start_frozen: bool,
    reset_at: Option<u64>,
    toggle_at: Option<u64>,
    resize_at: Option<(u64, u32, u32)>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            frames: 600,
            out_dir: PathBuf::from("frames"),
            seed: None,
            save_every: 60,
            start_frozen: false,
            reset_at: None,
            toggle_at: None,
            resize_at: None,
        }
    }
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);

    while let Some(flag) = it.next() {
        let mut value = |name: &str| {
            it.next()
                .with_context(|| format!("{name} requires a value"))
        };
        match flag.as_str() {
            "--width" => args.width = value("--width")?.parse()?,
            "--height" => args.height = value("--height")?.parse()?,
            "--frames" => args.frames = value("--frames")?.parse()?,
            "--out" => args.out_dir = PathBuf::from(value("--out")?),
            "--seed" => args.seed = Some(value("--seed")?.parse()?),
            "--save-every" => args.save_every = value("--save-every")?.parse()?,
            "--static" => args.start_frozen = true,
            "--reset-at" => args.reset_at = Some(value("--reset-at")?.parse()?),
            "--toggle-at" => args.toggle_at = Some(value("--toggle-at")?.parse()?),
            "--resize-at" => {
                // FRAME:WxH, e.g. 300:800x600
                let arg = value("--resize-at")?;
                args.resize_at = Some(parse_resize(&arg)?);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => bail!("unknown flag {other:?} (try --help)"),
        }
    }

    if args.width == 0 || args.height == 0 {
        bail!("viewport dimensions must be non-zero");
    }
    Ok(args)
}

fn parse_resize(arg: &str) -> Result<(u64, u32, u32)> {
    let (frame, dims) = arg
        .split_once(':')
        .context("--resize-at expects FRAME:WxH")?;
    let (w, h) = dims.split_once('x').context("--resize-at expects FRAME:WxH")?;
    let (w, h): (u32, u32) = (w.parse()?, h.parse()?);
    if w == 0 || h == 0 {
        bail!("--resize-at dimensions must be non-zero");
    }
    Ok((frame.parse()?, w, h))
}

fn print_usage() {
    println!("railband-studio — scrolling rail ribbons, headless");
    println!();
    println!("  --width N        viewport width in px (default 1280)");
    println!("  --height N       viewport height in px (default 720)");
    println!("  --frames N       frames to render (default 600)");
    println!("  --out DIR        PNG output directory (default frames/)");
    println!("  --seed N         seed the random stream (default: entropy)");
    println!("  --save-every N   export every Nth frame, 0 = never (default 60)");
    println!("  --static         start with animation frozen");
    println!("  --reset-at F     reset the scene at frame F");
    println!("  --toggle-at F    toggle animation at frame F");
    println!("  --resize-at F:WxH  resize the viewport at frame F");
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    let args = parse_args()?;

    let rng = match args.seed {
        Some(seed) => ChaChaRandom::seed_from_u64(seed),
        None => ChaChaRandom::from_entropy(),
    };

    let config = SceneConfig::default();
    let spawn_period = config.spawn_period;
    let prune_period = config.prune_period;

    let mut scene = Scene::new(
        Viewport::new(args.width as f32, args.height as f32),
        config,
        Box::new(rng),
    );
    if args.start_frozen {
        scene.toggle_animate();
    }

    let mut surface = RasterSurface::new(args.width, args.height);
    let mut spawn_timer = IntervalTimer::new(spawn_period);
    let mut prune_timer = IntervalTimer::new(prune_period);
    let mut clock = FrameClock::new();

    log::info!(
        "rendering {} frames at {}x{} into {}",
        args.frames,
        args.width,
        args.height,
        args.out_dir.display()
    );

    for frame in 0..args.frames {
        if args.reset_at == Some(frame) {
            scene.reset();
        }
        if args.toggle_at == Some(frame) {
            scene.toggle_animate();
        }
        if let Some((at, w, h)) = args.resize_at {
            if at == frame {
                scene.resize(Viewport::new(w as f32, h as f32));
                surface = RasterSurface::new(w, h);
            }
        }

        let now = frame * UNITS_PER_FRAME;
        if spawn_timer.due(now) {
            scene.spawn_tick();
        }
        if prune_timer.due(now) {
            scene.prune_tick();
        }

        scene.draw_frame(&mut surface);

        if args.save_every > 0 && frame % args.save_every == 0 {
            export::save_frame(&surface, &args.out_dir, frame)?;
        }

        clock.tick();
    }

    let elapsed = clock.tick();
    log::info!(
        "done: {} frames in {:.2}s, {} bundles live at exit",
        args.frames,
        elapsed.elapsed_units as f32 / 1000.0,
        scene.bundles().len()
    );
    Ok(())
}
