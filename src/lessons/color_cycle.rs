// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! A texture tinted by a hue that cycles on wall-clock time.
//! The clock is advanced once per frame but moves only at its own rate,
//! so the cycle speed does not depend on the frame rate.

use crate::{
    animation::AnimationClock,
    context::Context,
    error::LoadError,
    game::{Model, Render},
    render::{compositor::center_origin, style::Color, DrawOptions, FrameCompositor},
};
use log::warn;

pub const SHEET: &str = "sheet";
pub const SHEET_ASSET: &str = "color_cycle/spritesheet.png";

pub struct ColorCycleModel {
    pub clock: AnimationClock,
}

impl ColorCycleModel {
    pub fn new(ticks_per_second: u32, tick_increment: u32) -> Self {
        Self {
            clock: AnimationClock::new(ticks_per_second, tick_increment),
        }
    }
}

impl Model for ColorCycleModel {
    fn init(&mut self, ctx: &mut Context) -> Result<(), LoadError> {
        ctx.load_texture(SHEET, SHEET_ASSET)
    }

    fn handle_event(&mut self, _ctx: &mut Context, _dt: f32) {}

    fn handle_timer(&mut self, _ctx: &mut Context, _dt: f32) {
        self.clock.advance();
    }
}

pub struct ColorCycleRender;

impl ColorCycleRender {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ColorCycleRender {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for ColorCycleRender {
    type Model = ColorCycleModel;

    fn draw(&mut self, ctx: &mut Context, model: &mut ColorCycleModel, _dt: f32) {
        let tint = model.clock.color();
        if let Some(t) = ctx.textures.get_mut(SHEET) {
            if let Err(e) = t.set_color(tint.r, tint.g, tint.b) {
                warn!("{}", e);
            }
        }
        let screen = (ctx.config.width, ctx.config.height);
        let mut fc = FrameCompositor::begin(ctx.adapter.as_mut(), Color::WHITE);
        if let Some(t) = ctx.textures.get(SHEET) {
            let (x, y) = center_origin(screen, (t.width(), t.height()));
            fc.draw_or_skip(t, x, y, &DrawOptions::new());
        }
        fc.finish();
    }
}
