// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! Rotation and flipping of a centered arrow.
//! a/d rotate by -60/+60 degrees, q/w/e pick horizontal/no/vertical flip.

use crate::{
    context::Context,
    error::LoadError,
    event::{Event, KeyCode},
    game::{Model, Render},
    render::{
        compositor::center_origin,
        style::{Color, Flip},
        DrawOptions, FrameCompositor, Transform,
    },
};
use log::debug;

pub const ARROW: &str = "arrow";
pub const ARROW_ASSET: &str = "rotation/arrow.png";
pub const ANGLE_STEP: f64 = 60.0;

pub struct RotationModel {
    pub degrees: f64,
    pub flip: Flip,
}

impl RotationModel {
    pub fn new() -> Self {
        Self {
            degrees: 0.0,
            flip: Flip::NONE,
        }
    }

    pub fn press(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('a') => self.degrees -= ANGLE_STEP,
            KeyCode::Char('d') => self.degrees += ANGLE_STEP,
            KeyCode::Char('q') => self.flip = Flip::HORIZONTAL,
            KeyCode::Char('w') => self.flip = Flip::NONE,
            KeyCode::Char('e') => self.flip = Flip::VERTICAL,
            _ => {}
        }
    }

    pub fn transform(&self) -> Transform {
        Transform::new(self.degrees, self.flip)
    }
}

impl Default for RotationModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for RotationModel {
    fn init(&mut self, ctx: &mut Context) -> Result<(), LoadError> {
        ctx.load_texture(ARROW, ARROW_ASSET)
    }

    fn handle_event(&mut self, ctx: &mut Context, _dt: f32) {
        for e in &ctx.input_events {
            if let Event::Key(key) = e {
                self.press(key.code);
                debug!("arrow at {} degrees, flip {:?}", self.degrees, self.flip);
            }
        }
    }

    fn handle_timer(&mut self, _ctx: &mut Context, _dt: f32) {}
}

pub struct RotationRender;

impl RotationRender {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RotationRender {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for RotationRender {
    type Model = RotationModel;

    fn draw(&mut self, ctx: &mut Context, model: &mut RotationModel, _dt: f32) {
        let screen = (ctx.config.width, ctx.config.height);
        let mut fc = FrameCompositor::begin(ctx.adapter.as_mut(), Color::WHITE);
        if let Some(t) = ctx.textures.get(ARROW) {
            let (x, y) = center_origin(screen, (t.width(), t.height()));
            fc.draw_or_skip(t, x, y, &DrawOptions::new().transform(model.transform()));
        }
        fc.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_turns_come_full_circle() {
        let mut m = RotationModel::new();
        for _ in 0..6 {
            m.press(KeyCode::Char('d'));
        }
        assert_eq!(m.degrees, 360.0);
        assert!(m.transform().is_identity());
        m.press(KeyCode::Char('a'));
        assert_eq!(m.transform().normalized().angle, 300.0);
    }

    #[test]
    fn flip_keys_select_axis() {
        let mut m = RotationModel::new();
        m.press(KeyCode::Char('q'));
        assert_eq!(m.flip, Flip::HORIZONTAL);
        m.press(KeyCode::Char('e'));
        assert_eq!(m.flip, Flip::VERTICAL);
        m.press(KeyCode::Char('w'));
        assert!(m.flip.is_empty());
    }
}
