// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! Game encapsulates Model and Render and implements the lesson lifecycle:
//!
//! ```text
//! init adapter ──fail──────────────────────────┐
//!     │                                          │
//! load media (Model::init, Render::init) ─fail─┤
//!     │                                          │
//! loop until quit or frame_limit:                │
//!     drain events, update model, draw frame     │
//!     │                                          ▼
//!     └──────────────────────────────────────► close
//! ```
//!
//! close runs on every path: it releases all textures and tears the
//! adapter down, even when init or loading failed.
//!
//! # Example
//!
//! ```no_run
//! use pixel_lessons::{config::LessonConfig, context::Context, game::Game};
//! use pixel_lessons::lessons::rotation::{RotationModel, RotationRender};
//! use pixel_lessons::render::adapter::soft::SoftAdapter;
//!
//! let ctx = Context::new(LessonConfig::default(), Box::new(SoftAdapter::new()));
//! let mut g = Game::new(RotationModel::new(), RotationRender::new(), ctx);
//! let outcome = g.run();
//! println!("{}", outcome);
//! ```

use crate::{
    context::Context,
    error::{InitError, LoadError},
    event::drain_events,
};
use log::{error, info};
use std::{fmt, time::Instant};

/// The Model interface, main entrance for data and core logic
pub trait Model {
    /// Loads media. Called once after the adapter initialized.
    fn init(&mut self, ctx: &mut Context) -> Result<(), LoadError>;
    fn update(&mut self, ctx: &mut Context, dt: f32) {
        self.handle_event(ctx, dt);
        self.handle_timer(ctx, dt);
    }
    fn handle_event(&mut self, ctx: &mut Context, dt: f32);
    fn handle_timer(&mut self, ctx: &mut Context, dt: f32);
}

/// The Render interface, takes context and model as input params.
/// It composes and presents every single frame.
pub trait Render {
    type Model: Model;

    fn init(&mut self, _ctx: &mut Context, _m: &mut Self::Model) -> Result<(), LoadError> {
        Ok(())
    }
    fn update(&mut self, ctx: &mut Context, m: &mut Self::Model, dt: f32) {
        self.draw(ctx, m, dt);
    }
    fn draw(&mut self, ctx: &mut Context, model: &mut Self::Model, dt: f32);
}

/// How a run ended. Every variant went through close.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    InitFailed(InitError),
    LoadFailed(LoadError),
    Finished { frames: u64 },
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::InitFailed(e) => write!(f, "Failed to initialize! {}", e),
            RunOutcome::LoadFailed(e) => write!(f, "Failed to load media! {}", e),
            RunOutcome::Finished { frames } => write!(f, "finished after {} frames", frames),
        }
    }
}

/// Game encapsulates a Model, a Render and a Context structure
pub struct Game<M, R>
where
    M: Model,
    R: Render<Model = M>,
{
    pub context: Context,
    pub model: M,
    pub render: R,
}

impl<M, R> Game<M, R>
where
    M: Model,
    R: Render<Model = M>,
{
    pub fn new(m: M, r: R, ctx: Context) -> Self {
        Self {
            context: ctx,
            model: m,
            render: r,
        }
    }

    /// Runs the whole lifecycle and always closes
    pub fn run(&mut self) -> RunOutcome {
        info!("Begin run...");
        let outcome = match self.init() {
            Ok(()) => {
                self.main_loop();
                RunOutcome::Finished {
                    frames: self.context.stage,
                }
            }
            Err(o) => {
                error!("{}", o);
                o
            }
        };
        self.close();
        info!("End run: {}", outcome);
        outcome
    }

    /// init adapter, then load media of model and render
    pub fn init(&mut self) -> Result<(), RunOutcome> {
        info!("Init game...");
        let cfg = &self.context.config;
        let (title, w, h, vsync) = (cfg.title.clone(), cfg.width, cfg.height, cfg.vsync);
        self.context
            .adapter
            .init(&title, w, h, vsync)
            .map_err(RunOutcome::InitFailed)?;
        self.model
            .init(&mut self.context)
            .map_err(RunOutcome::LoadFailed)?;
        self.render
            .init(&mut self.context, &mut self.model)
            .map_err(RunOutcome::LoadFailed)?;
        Ok(())
    }

    fn frame_limit_reached(&self) -> bool {
        match self.context.config.frame_limit {
            Some(limit) => self.context.stage >= limit,
            None => false,
        }
    }

    /// Main loop. Every iteration drains all pending events without waiting,
    /// then updates and draws one frame. A quit seen while draining still
    /// finishes the current frame.
    pub fn main_loop(&mut self) {
        let mut last_tick = Instant::now();
        while !self.context.quit && !self.frame_limit_reached() {
            self.context.input_events.clear();
            if drain_events(self.context.adapter.as_mut(), &mut self.context.input_events) {
                info!("quit requested at stage {}", self.context.stage);
                self.context.quit = true;
            }
            let dt = last_tick.elapsed().as_secs_f32();
            last_tick = Instant::now();
            self.on_tick(dt);
        }
    }

    /// calls every frame, updates model logic and does rendering
    pub fn on_tick(&mut self, dt: f32) {
        self.context.stage += 1;
        self.model.update(&mut self.context, dt);
        self.render.update(&mut self.context, &mut self.model, dt);
    }

    /// release all textures, then renderer and window
    pub fn close(&mut self) {
        self.context.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::LessonConfig,
        event::Event,
        render::{
            adapter::{soft::SoftAdapter, Adapter},
            image::RawImage, style::Color, DrawOptions,
            FrameCompositor,
        },
    };

    #[derive(Default)]
    struct Counting {
        fail_load: bool,
        events_seen: usize,
        timers: u64,
    }

    impl Model for Counting {
        fn init(&mut self, ctx: &mut Context) -> Result<(), LoadError> {
            let img = RawImage::filled(4, 4, Color::BLACK);
            ctx.textures
                .slot("block")
                .load_from_image(ctx.adapter.as_mut(), "block", &img)?;
            if self.fail_load {
                return Err(LoadError::Decode {
                    path: "second.png".to_string(),
                    reason: "broken".to_string(),
                });
            }
            Ok(())
        }
        fn handle_event(&mut self, ctx: &mut Context, _dt: f32) {
            self.events_seen += ctx.input_events.len();
        }
        fn handle_timer(&mut self, _ctx: &mut Context, _dt: f32) {
            self.timers += 1;
        }
    }

    struct CountingRender;

    impl Render for CountingRender {
        type Model = Counting;
        fn draw(&mut self, ctx: &mut Context, _m: &mut Counting, _dt: f32) {
            let mut fc = FrameCompositor::begin(ctx.adapter.as_mut(), Color::WHITE);
            if let Some(t) = ctx.textures.get("block") {
                fc.draw_or_skip(t, 0, 0, &DrawOptions::new());
            }
            fc.finish();
        }
    }

    fn soft(ctx: &mut Context) -> &mut SoftAdapter {
        ctx.adapter.as_any().downcast_mut::<SoftAdapter>().unwrap()
    }

    fn game(ad: SoftAdapter, model: Counting, frames: Option<u64>) -> Game<Counting, CountingRender> {
        let cfg = LessonConfig {
            frame_limit: frames,
            ..LessonConfig::default()
        };
        Game::new(model, CountingRender, Context::new(cfg, Box::new(ad)))
    }

    #[test]
    fn quit_finishes_current_frame_then_closes() {
        let mut ad = SoftAdapter::new();
        ad.push_event(Event::char('x'));
        ad.push_event(Event::Quit);
        let mut g = game(ad, Counting::default(), None);
        assert_eq!(g.run(), RunOutcome::Finished { frames: 1 });
        assert_eq!(g.model.events_seen, 2);
        let ad = soft(&mut g.context);
        assert_eq!(ad.frames_presented(), 1);
        assert_eq!(ad.live_textures(), 0);
        assert!(!ad.is_initialized());
        assert!(!g.context.textures.get("block").unwrap().is_loaded());
    }

    #[test]
    fn empty_queue_never_blocks_the_frame() {
        let mut g = game(SoftAdapter::new(), Counting::default(), Some(3));
        assert_eq!(g.run(), RunOutcome::Finished { frames: 3 });
        assert_eq!(g.model.timers, 3);
        assert_eq!(soft(&mut g.context).frames_presented(), 3);
    }

    #[test]
    fn init_failure_skips_loop_and_still_closes() {
        let mut ad = SoftAdapter::new();
        ad.set_fail_init(Some(InitError::Window("no display".to_string())));
        let mut g = game(ad, Counting::default(), Some(5));
        assert_eq!(
            g.run(),
            RunOutcome::InitFailed(InitError::Window("no display".to_string()))
        );
        assert_eq!(g.context.stage, 0);
        assert_eq!(soft(&mut g.context).frames_presented(), 0);
    }

    #[test]
    fn load_failure_releases_partial_media() {
        let model = Counting {
            fail_load: true,
            ..Counting::default()
        };
        let mut g = game(SoftAdapter::new(), model, Some(5));
        assert!(matches!(g.run(), RunOutcome::LoadFailed(LoadError::Decode { .. })));
        assert_eq!(g.context.stage, 0);
        assert_eq!(g.context.adapter.live_textures(), 0);
    }
}
