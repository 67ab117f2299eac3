// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! Color modulation. q/w/e raise red/green/blue by 32, a/s/d lower them,
//! wrapping around at 8 bits.

use crate::{
    context::Context,
    error::LoadError,
    event::{Event, KeyCode},
    game::{Model, Render},
    render::{style::Color, DrawOptions, FrameCompositor},
};
use log::{debug, warn};

pub const COLORS: &str = "colors";
pub const COLORS_ASSET: &str = "color_modulation/colors.png";
pub const STEP: u8 = 32;

pub struct ColorModulationModel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorModulationModel {
    pub fn new() -> Self {
        Self {
            r: 0xFF,
            g: 0xFF,
            b: 0xFF,
        }
    }

    /// Applies one key press, returns false for keys without a channel
    pub fn press(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => self.r = self.r.wrapping_add(STEP),
            KeyCode::Char('w') => self.g = self.g.wrapping_add(STEP),
            KeyCode::Char('e') => self.b = self.b.wrapping_add(STEP),
            KeyCode::Char('a') => self.r = self.r.wrapping_sub(STEP),
            KeyCode::Char('s') => self.g = self.g.wrapping_sub(STEP),
            KeyCode::Char('d') => self.b = self.b.wrapping_sub(STEP),
            _ => return false,
        }
        true
    }
}

impl Default for ColorModulationModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for ColorModulationModel {
    fn init(&mut self, ctx: &mut Context) -> Result<(), LoadError> {
        ctx.load_texture(COLORS, COLORS_ASSET)
    }

    fn handle_event(&mut self, ctx: &mut Context, _dt: f32) {
        for e in &ctx.input_events {
            if let Event::Key(key) = e {
                if self.press(key.code) {
                    debug!("modulation ({}, {}, {})", self.r, self.g, self.b);
                }
            }
        }
    }

    fn handle_timer(&mut self, _ctx: &mut Context, _dt: f32) {}
}

pub struct ColorModulationRender;

impl ColorModulationRender {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ColorModulationRender {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for ColorModulationRender {
    type Model = ColorModulationModel;

    fn draw(&mut self, ctx: &mut Context, model: &mut ColorModulationModel, _dt: f32) {
        if let Some(t) = ctx.textures.get_mut(COLORS) {
            if let Err(e) = t.set_color(model.r, model.g, model.b) {
                warn!("{}", e);
            }
        }
        let mut fc = FrameCompositor::begin(ctx.adapter.as_mut(), Color::WHITE);
        if let Some(t) = ctx.textures.get(COLORS) {
            fc.draw_or_skip(t, 0, 0, &DrawOptions::new());
        }
        fc.finish();
    }
}
