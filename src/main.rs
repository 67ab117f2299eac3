// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

/// pixel_lessons runs one tutorial program.
///
/// Usage:
/// pixel_lessons rotation --backend sdl
/// pixel_lessons sprite-sheet --frames 1 --screenshot sheet.png
/// pixel_lessons color-cycle --config lessons.toml --assets ./assets
///
/// The process always exits with 0, failures are reported in the log.
use clap::{Parser, ValueEnum};
use log::{error, info, warn};
use pixel_lessons::{
    config::LessonConfig,
    context::Context,
    lessons::Lesson,
    log::{init_log, parse_level},
    render::adapter::{soft::SoftAdapter, Adapter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// headless cpu renderer
    Soft,
    /// SDL2 window, needs the `sdl` feature
    Sdl,
}

#[derive(Parser, Debug)]
#[command(name = "pixel_lessons", version, about = "2D rendering lessons")]
struct Cli {
    /// Lesson to run
    #[arg(value_enum)]
    lesson: Lesson,

    /// TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<String>,

    /// Render backend
    #[arg(long, value_enum, default_value_t = Backend::Sdl)]
    backend: Backend,

    /// Stop after N frames
    #[arg(long, value_name = "N")]
    frames: Option<u64>,

    /// Save the last presented frame (soft backend only)
    #[arg(long, value_name = "FILE")]
    screenshot: Option<String>,

    /// Asset root directory
    #[arg(long, value_name = "DIR")]
    assets: Option<String>,
}

fn load_config(cli: &Cli) -> LessonConfig {
    let mut cfg = match &cli.config {
        Some(path) => match LessonConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{}, using defaults", e);
                LessonConfig::default()
            }
        },
        None => LessonConfig::default(),
    };
    if let Some(n) = cli.frames {
        cfg.frame_limit = Some(n);
    }
    if let Some(dir) = &cli.assets {
        cfg.asset_root = dir.clone();
    }
    cfg
}

#[cfg(sdl_backend)]
fn sdl_adapter() -> Option<Box<dyn Adapter>> {
    Some(Box::new(pixel_lessons::render::adapter::sdl::SdlAdapter::new()))
}

#[cfg(not(sdl_backend))]
fn sdl_adapter() -> Option<Box<dyn Adapter>> {
    None
}

fn main() {
    let cli = Cli::parse();
    let mut cfg = load_config(&cli);
    if let Err(e) = init_log(parse_level(&cfg.log_level), &cfg.log_file) {
        eprintln!("log init failed: {}", e);
    }
    info!("pixel_lessons start...{:?}", cli.lesson);

    let (adapter, headless): (Box<dyn Adapter>, bool) = match cli.backend {
        Backend::Sdl => match sdl_adapter() {
            Some(ad) => (ad, false),
            None => {
                warn!("built without the sdl feature, using the soft backend");
                (Box::new(SoftAdapter::new()), true)
            }
        },
        Backend::Soft => (Box::new(SoftAdapter::new()), true),
    };
    if headless && cfg.frame_limit.is_none() {
        // nothing can send quit to a headless run
        cfg.frame_limit = Some(1);
    }

    let (outcome, mut ctx) = cli.lesson.run(Context::new(cfg, adapter));
    info!("{:?} {}", cli.lesson, outcome);

    if let Some(path) = &cli.screenshot {
        match ctx.adapter.as_any().downcast_mut::<SoftAdapter>() {
            Some(soft) => match soft.save_presented(path) {
                Ok(()) => info!("screenshot saved to {}", path),
                Err(e) => error!("{}", e),
            },
            None => warn!("--screenshot needs the soft backend"),
        }
    }
}
