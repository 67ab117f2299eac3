// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! Shows one image until the user closes the window.

use crate::{
    context::Context,
    error::LoadError,
    game::{Model, Render},
    render::{style::Color, DrawOptions, FrameCompositor},
};

pub const X_OUT: &str = "x_out";
pub const X_OUT_ASSET: &str = "events/x.bmp";

pub struct EventsModel;

impl EventsModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EventsModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for EventsModel {
    fn init(&mut self, ctx: &mut Context) -> Result<(), LoadError> {
        ctx.load_texture(X_OUT, X_OUT_ASSET)
    }

    // quit is the only event, handled by the game loop
    fn handle_event(&mut self, _ctx: &mut Context, _dt: f32) {}

    fn handle_timer(&mut self, _ctx: &mut Context, _dt: f32) {}
}

pub struct EventsRender;

impl EventsRender {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EventsRender {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for EventsRender {
    type Model = EventsModel;

    fn draw(&mut self, ctx: &mut Context, _model: &mut EventsModel, _dt: f32) {
        let mut fc = FrameCompositor::begin(ctx.adapter.as_mut(), Color::WHITE);
        if let Some(t) = ctx.textures.get(X_OUT) {
            fc.draw_or_skip(t, 0, 0, &DrawOptions::new());
        }
        fc.finish();
    }
}
