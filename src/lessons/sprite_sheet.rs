// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! Clip rendering: one sheet of four 100x100 dots, each drawn into a
//! corner of the screen.

use crate::{
    context::Context,
    error::LoadError,
    game::{Model, Render},
    render::{
        sprite::{grid, SpriteFrames},
        style::Color,
        DrawOptions, FrameCompositor,
    },
};
use log::error;

pub const DOTS: &str = "dots";
pub const DOTS_ASSET: &str = "sprite_sheet/dots.png";
pub const CLIP_SIZE: u32 = 100;

pub struct SpriteSheetModel {
    pub frames: SpriteFrames,
}

impl SpriteSheetModel {
    pub fn new() -> Self {
        Self {
            frames: SpriteFrames::new(),
        }
    }
}

impl Default for SpriteSheetModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for SpriteSheetModel {
    fn init(&mut self, ctx: &mut Context) -> Result<(), LoadError> {
        ctx.load_texture(DOTS, DOTS_ASSET)?;
        // top left, top right, bottom left, bottom right
        self.frames.define_frames(grid(2, 2, CLIP_SIZE, CLIP_SIZE));
        Ok(())
    }

    fn handle_event(&mut self, _ctx: &mut Context, _dt: f32) {}

    fn handle_timer(&mut self, _ctx: &mut Context, _dt: f32) {}
}

pub struct SpriteSheetRender;

impl SpriteSheetRender {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpriteSheetRender {
    fn default() -> Self {
        Self::new()
    }
}

/// Screen origin of frame i, one corner per frame
fn corner(i: usize, clip_w: u32, clip_h: u32, sw: u32, sh: u32) -> (i32, i32) {
    let right = sw as i32 - clip_w as i32;
    let bottom = sh as i32 - clip_h as i32;
    match i {
        0 => (0, 0),
        1 => (right, 0),
        2 => (0, bottom),
        _ => (right, bottom),
    }
}

impl Render for SpriteSheetRender {
    type Model = SpriteSheetModel;

    fn draw(&mut self, ctx: &mut Context, model: &mut SpriteSheetModel, _dt: f32) {
        let (sw, sh) = (ctx.config.width, ctx.config.height);
        let mut fc = FrameCompositor::begin(ctx.adapter.as_mut(), Color::WHITE);
        if let Some(sheet) = ctx.textures.get(DOTS) {
            for i in 0..4 {
                match model.frames.frame_at(i) {
                    Ok(clip) => {
                        let (x, y) = corner(i, clip.w, clip.h, sw, sh);
                        fc.draw_or_skip(sheet, x, y, &DrawOptions::new().clip(clip));
                    }
                    Err(e) => error!("sprite clip: {}", e),
                }
            }
        }
        fc.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_of_default_screen() {
        assert_eq!(corner(0, 100, 100, 640, 480), (0, 0));
        assert_eq!(corner(1, 100, 100, 640, 480), (540, 0));
        assert_eq!(corner(2, 100, 100, 640, 480), (0, 380));
        assert_eq!(corner(3, 100, 100, 640, 480), (540, 380));
    }
}
