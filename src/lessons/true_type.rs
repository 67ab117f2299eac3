// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! A line of text rendered once from a ttf font, drawn centered.

use crate::{
    context::Context,
    error::LoadError,
    game::{Model, Render},
    render::{compositor::center_origin, style::Color, DrawOptions, FrameCompositor, TextFont},
};

pub const TEXT: &str = "text";
pub const FONT_ASSET: &str = "true_type/lazy.ttf";
pub const FONT_SIZE: f32 = 28.0;
pub const LINE: &str = "The quick brown fox jumps over the lazy dog";

pub struct TrueTypeModel;

impl TrueTypeModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TrueTypeModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for TrueTypeModel {
    fn init(&mut self, ctx: &mut Context) -> Result<(), LoadError> {
        let font = TextFont::open(&ctx.config.asset(FONT_ASSET), FONT_SIZE)?;
        ctx.textures
            .slot(TEXT)
            .load_from_text(ctx.adapter.as_mut(), &font, LINE, Color::BLACK)
    }

    fn handle_event(&mut self, _ctx: &mut Context, _dt: f32) {}

    fn handle_timer(&mut self, _ctx: &mut Context, _dt: f32) {}
}

pub struct TrueTypeRender;

impl TrueTypeRender {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TrueTypeRender {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for TrueTypeRender {
    type Model = TrueTypeModel;

    fn draw(&mut self, ctx: &mut Context, _model: &mut TrueTypeModel, _dt: f32) {
        let screen = (ctx.config.width, ctx.config.height);
        let mut fc = FrameCompositor::begin(ctx.adapter.as_mut(), Color::WHITE);
        if let Some(t) = ctx.textures.get(TEXT) {
            let (x, y) = center_origin(screen, (t.width(), t.height()));
            fc.draw_or_skip(t, x, y, &DrawOptions::new());
        }
        fc.finish();
    }
}
