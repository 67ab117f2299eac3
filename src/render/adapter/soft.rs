// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! Implements the Adapter trait on the CPU, without any window.
//!
//! The render target is an RgbaImage. copy_ex follows SDL_RenderCopyEx:
//! the destination rect is rotated clockwise around its center, each covered
//! screen pixel is mapped back into the rect, mirrored by the flip, scaled
//! into the source clip and sampled nearest-neighbour. Modulation and blend
//! modes use the same integer formulas as SDL's software renderer.
//!
//! Input comes from a scripted FIFO filled with push_event, which makes this
//! adapter the test double for whole lessons as well as a headless backend.

use crate::{
    error::InitError,
    event::Event,
    render::{
        adapter::{Adapter, TextureId},
        image::RawImage,
        style::{BlendMode, Color, Flip},
    },
    util::{PointI32, Rect},
};
use image::{Rgba, RgbaImage};
use log::{debug, info};
use std::any::Any;
use std::collections::{HashMap, VecDeque};

/// One uploaded texture with its modulation state
#[derive(Debug, Clone)]
pub struct SoftTexture {
    pub image: RawImage,
    pub color_mod: (u8, u8, u8),
    pub alpha_mod: u8,
    pub blend_mode: BlendMode,
}

pub struct SoftAdapter {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    initialized: bool,
    frame: RgbaImage,
    presented: RgbaImage,
    frames_presented: u64,
    draw_calls: u64,
    textures: HashMap<TextureId, SoftTexture>,
    next_id: u32,
    events: VecDeque<Event>,
    fail_init: Option<InitError>,
    fail_uploads: bool,
}

impl Default for SoftAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl SoftAdapter {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            width: 0,
            height: 0,
            vsync: false,
            initialized: false,
            frame: RgbaImage::new(0, 0),
            presented: RgbaImage::new(0, 0),
            frames_presented: 0,
            draw_calls: 0,
            textures: HashMap::new(),
            next_id: 1,
            events: VecDeque::new(),
            fail_init: None,
            fail_uploads: false,
        }
    }

    /// Queue an input event for a later poll
    pub fn push_event(&mut self, e: Event) {
        self.events.push_back(e);
    }

    /// Make the next init fail with err
    pub fn set_fail_init(&mut self, err: Option<InitError>) {
        self.fail_init = err;
    }

    /// Make every upload fail, simulating an out of memory renderer
    pub fn set_fail_uploads(&mut self, fail: bool) {
        self.fail_uploads = fail;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn texture(&self, id: TextureId) -> Option<&SoftTexture> {
        self.textures.get(&id)
    }

    /// The frame under composition
    pub fn frame(&self) -> &RgbaImage {
        &self.frame
    }

    /// The last presented frame
    pub fn presented(&self) -> &RgbaImage {
        &self.presented
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let p = self.frame.get_pixel(x, y).0;
        Color::rgba(p[0], p[1], p[2], p[3])
    }

    /// Write the last presented frame to an image file
    pub fn save_presented(&self, path: &str) -> Result<(), String> {
        self.presented
            .save(path)
            .map_err(|e| format!("save screenshot {} error: {}", path, e))
    }

    fn texture_mut(&mut self, id: TextureId) -> Result<&mut SoftTexture, String> {
        self.textures
            .get_mut(&id)
            .ok_or_else(|| format!("invalid texture {}", id.0))
    }
}

fn mul8(a: u8, b: u8) -> u8 {
    (a as u32 * b as u32 / 255) as u8
}

fn blend_pixel(dst: &mut Rgba<u8>, src: [u8; 4], mode: BlendMode) {
    let [sr, sg, sb, sa] = src;
    let d = &mut dst.0;
    match mode {
        BlendMode::None => {
            *d = src;
        }
        BlendMode::Blend => {
            let inv = 255 - sa as u32;
            let mix = |s: u8, t: u8| ((s as u32 * sa as u32 + t as u32 * inv) / 255) as u8;
            d[0] = mix(sr, d[0]);
            d[1] = mix(sg, d[1]);
            d[2] = mix(sb, d[2]);
            d[3] = (sa as u32 + d[3] as u32 * inv / 255) as u8;
        }
        BlendMode::Add => {
            let add = |s: u8, t: u8| (mul8(s, sa) as u32 + t as u32).min(255) as u8;
            d[0] = add(sr, d[0]);
            d[1] = add(sg, d[1]);
            d[2] = add(sb, d[2]);
        }
        BlendMode::Mod => {
            d[0] = mul8(sr, d[0]);
            d[1] = mul8(sg, d[1]);
            d[2] = mul8(sb, d[2]);
        }
    }
}

impl Adapter for SoftAdapter {
    fn init(&mut self, title: &str, width: u32, height: u32, vsync: bool) -> Result<(), InitError> {
        if let Some(err) = self.fail_init.take() {
            return Err(err);
        }
        self.title = title.to_string();
        self.width = width;
        self.height = height;
        self.vsync = vsync;
        self.frame = RgbaImage::new(width, height);
        self.presented = RgbaImage::new(width, height);
        self.initialized = true;
        info!("soft renderer init ok {}x{} '{}'", width, height, title);
        Ok(())
    }

    fn reset(&mut self) {
        if !self.textures.is_empty() {
            info!("soft renderer destroys {} live textures", self.textures.len());
        }
        self.textures.clear();
        self.initialized = false;
    }

    fn poll_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    fn create_texture(&mut self, image: &RawImage) -> Result<TextureId, String> {
        if self.fail_uploads {
            return Err("out of texture memory".to_string());
        }
        if image.width == 0 || image.height == 0 {
            return Err("texture has zero size".to_string());
        }
        let id = TextureId(self.next_id);
        self.next_id += 1;
        self.textures.insert(
            id,
            SoftTexture {
                image: image.clone(),
                color_mod: (0xFF, 0xFF, 0xFF),
                alpha_mod: 0xFF,
                blend_mode: BlendMode::None,
            },
        );
        debug!("soft texture {} created {}x{}", id.0, image.width, image.height);
        Ok(id)
    }

    fn destroy_texture(&mut self, id: TextureId) {
        if self.textures.remove(&id).is_some() {
            debug!("soft texture {} destroyed", id.0);
        }
    }

    fn set_texture_color_mod(&mut self, id: TextureId, r: u8, g: u8, b: u8) -> Result<(), String> {
        self.texture_mut(id)?.color_mod = (r, g, b);
        Ok(())
    }

    fn set_texture_alpha_mod(&mut self, id: TextureId, a: u8) -> Result<(), String> {
        self.texture_mut(id)?.alpha_mod = a;
        Ok(())
    }

    fn set_texture_blend_mode(&mut self, id: TextureId, mode: BlendMode) -> Result<(), String> {
        self.texture_mut(id)?.blend_mode = mode;
        Ok(())
    }

    fn copy_ex(
        &mut self,
        id: TextureId,
        src: Option<Rect>,
        dst: Rect,
        angle: f64,
        center: Option<PointI32>,
        flip: Flip,
    ) -> Result<(), String> {
        if !self.initialized {
            return Err("renderer is not initialized".to_string());
        }
        let tex = self
            .textures
            .get(&id)
            .ok_or_else(|| format!("invalid texture {}", id.0))?;
        self.draw_calls += 1;

        let img = &tex.image;
        let full = Rect::new(0, 0, img.width, img.height);
        let src = match src.unwrap_or(full).intersection(full) {
            Some(r) => r,
            None => return Ok(()),
        };
        if dst.is_empty() {
            return Ok(());
        }

        let (dw, dh) = (dst.w as f64, dst.h as f64);
        let (cx, cy) = match center {
            Some(p) => (p.x as f64, p.y as f64),
            None => dst.center(),
        };
        let (ox, oy) = (dst.x as f64 + cx, dst.y as f64 + cy);
        let (sin, cos) = if angle == 0.0 {
            (0.0, 1.0)
        } else {
            angle.to_radians().sin_cos()
        };

        // screen bounding box of the rotated destination
        let (mut minx, mut miny, mut maxx, mut maxy) = (f64::MAX, f64::MAX, f64::MIN, f64::MIN);
        for (x, y) in [(0.0, 0.0), (dw, 0.0), (0.0, dh), (dw, dh)] {
            let px = ox + (x - cx) * cos - (y - cy) * sin;
            let py = oy + (x - cx) * sin + (y - cy) * cos;
            minx = minx.min(px);
            miny = miny.min(py);
            maxx = maxx.max(px);
            maxy = maxy.max(py);
        }
        let x0 = minx.floor().max(0.0) as u32;
        let y0 = miny.floor().max(0.0) as u32;
        let x1 = (maxx.ceil().max(0.0) as u32).min(self.width);
        let y1 = (maxy.ceil().max(0.0) as u32).min(self.height);

        let (mr, mg, mb) = tex.color_mod;
        for sy in y0..y1 {
            for sx in x0..x1 {
                let px = sx as f64 + 0.5 - ox;
                let py = sy as f64 + 0.5 - oy;
                let lx = px * cos + py * sin + cx;
                let ly = -px * sin + py * cos + cy;
                if lx < 0.0 || ly < 0.0 || lx >= dw || ly >= dh {
                    continue;
                }
                let mut ix = ((lx * src.w as f64 / dw) as u32).min(src.w - 1);
                let mut iy = ((ly * src.h as f64 / dh) as u32).min(src.h - 1);
                if flip.horizontal() {
                    ix = src.w - 1 - ix;
                }
                if flip.vertical() {
                    iy = src.h - 1 - iy;
                }
                let texel = img.pixel(src.x as u32 + ix, src.y as u32 + iy);
                let color = [
                    mul8(texel.r, mr),
                    mul8(texel.g, mg),
                    mul8(texel.b, mb),
                    mul8(texel.a, tex.alpha_mod),
                ];
                blend_pixel(self.frame.get_pixel_mut(sx, sy), color, tex.blend_mode);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Color) {
        let px = Rgba(color.to_array());
        for p in self.frame.pixels_mut() {
            *p = px;
        }
    }

    fn present(&mut self) {
        self.presented = self.frame.clone();
        self.frames_presented += 1;
    }

    fn live_textures(&self) -> usize {
        self.textures.len()
    }

    fn as_any(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    fn adapter() -> SoftAdapter {
        let mut ad = SoftAdapter::new();
        ad.init("test", 8, 8, false).unwrap();
        ad.clear(Color::WHITE);
        ad
    }

    // 2x1 texture: left red, right blue
    fn two_tone(ad: &mut SoftAdapter) -> TextureId {
        let mut img = RawImage::filled(2, 1, RED);
        img.pixels[4..8].copy_from_slice(&BLUE.to_array());
        ad.create_texture(&img).unwrap()
    }

    #[test]
    fn copy_places_texture_at_destination() {
        let mut ad = adapter();
        let id = two_tone(&mut ad);
        ad.copy_ex(id, None, Rect::new(3, 4, 2, 1), 0.0, None, Flip::NONE)
            .unwrap();
        assert_eq!(ad.pixel(3, 4), RED);
        assert_eq!(ad.pixel(4, 4), BLUE);
        assert_eq!(ad.pixel(5, 4), Color::WHITE);
        assert_eq!(ad.pixel(3, 3), Color::WHITE);
    }

    #[test]
    fn horizontal_flip_mirrors() {
        let mut ad = adapter();
        let id = two_tone(&mut ad);
        ad.copy_ex(id, None, Rect::new(0, 0, 2, 1), 0.0, None, Flip::HORIZONTAL)
            .unwrap();
        assert_eq!(ad.pixel(0, 0), BLUE);
        assert_eq!(ad.pixel(1, 0), RED);
    }

    #[test]
    fn half_turn_equals_both_flips() {
        let mut img = RawImage::filled(2, 2, RED);
        img.pixels[12..16].copy_from_slice(&BLUE.to_array());
        let mut a = adapter();
        let ia = a.create_texture(&img).unwrap();
        a.copy_ex(ia, None, Rect::new(2, 2, 2, 2), 180.0, None, Flip::NONE)
            .unwrap();
        let mut b = adapter();
        let ib = b.create_texture(&img).unwrap();
        b.copy_ex(ib, None, Rect::new(2, 2, 2, 2), 0.0, None, Flip::all())
            .unwrap();
        assert_eq!(a.frame(), b.frame());
        assert_eq!(a.pixel(2, 2), BLUE);
    }

    #[test]
    fn quarter_turn_is_clockwise() {
        let mut ad = adapter();
        let id = two_tone(&mut ad);
        // 2x2 destination so the rotation stays on the grid
        ad.copy_ex(id, None, Rect::new(0, 0, 2, 2), 90.0, None, Flip::NONE)
            .unwrap();
        // left column (red) ends up on top after turning clockwise
        assert_eq!(ad.pixel(0, 0), RED);
        assert_eq!(ad.pixel(1, 0), RED);
        assert_eq!(ad.pixel(0, 1), BLUE);
    }

    #[test]
    fn quarter_turn_about_custom_center() {
        let mut ad = adapter();
        let id = two_tone(&mut ad);
        // pivot on the destination's top-left corner
        let pivot = Some(PointI32::new(0, 0));
        ad.copy_ex(id, None, Rect::new(4, 4, 2, 1), 90.0, pivot, Flip::NONE)
            .unwrap();
        assert_eq!(ad.pixel(3, 4), RED);
        assert_eq!(ad.pixel(3, 5), BLUE);
        assert_eq!(ad.pixel(4, 4), Color::WHITE);
        assert_eq!(ad.pixel(5, 4), Color::WHITE);
    }

    #[test]
    fn clip_samples_only_sub_region() {
        let mut ad = adapter();
        let id = two_tone(&mut ad);
        ad.copy_ex(id, Some(Rect::new(1, 0, 1, 1)), Rect::new(0, 0, 1, 1), 0.0, None, Flip::NONE)
            .unwrap();
        assert_eq!(ad.pixel(0, 0), BLUE);
    }

    #[test]
    fn color_and_alpha_modulation() {
        let mut ad = adapter();
        let id = ad.create_texture(&RawImage::filled(1, 1, Color::WHITE)).unwrap();
        ad.set_texture_color_mod(id, 255, 0, 0).unwrap();
        ad.copy_ex(id, None, Rect::new(0, 0, 1, 1), 0.0, None, Flip::NONE)
            .unwrap();
        assert_eq!(ad.pixel(0, 0), RED);

        ad.clear(Color::BLACK);
        ad.set_texture_color_mod(id, 255, 255, 255).unwrap();
        ad.set_texture_alpha_mod(id, 0).unwrap();
        ad.set_texture_blend_mode(id, BlendMode::Blend).unwrap();
        ad.copy_ex(id, None, Rect::new(0, 0, 1, 1), 0.0, None, Flip::NONE)
            .unwrap();
        assert_eq!(ad.pixel(0, 0), Color::BLACK);
    }

    #[test]
    fn blend_skips_keyed_pixels_but_none_copies_them() {
        let mut ad = adapter();
        let id = ad
            .create_texture(&RawImage::filled(1, 1, Color::rgba(0, 255, 255, 0)))
            .unwrap();
        ad.set_texture_blend_mode(id, BlendMode::Blend).unwrap();
        ad.copy_ex(id, None, Rect::new(0, 0, 1, 1), 0.0, None, Flip::NONE)
            .unwrap();
        assert_eq!(ad.pixel(0, 0), Color::WHITE);
        ad.set_texture_blend_mode(id, BlendMode::None).unwrap();
        ad.copy_ex(id, None, Rect::new(0, 0, 1, 1), 0.0, None, Flip::NONE)
            .unwrap();
        assert_eq!(ad.pixel(0, 0), Color::rgba(0, 255, 255, 0));
    }

    #[test]
    fn destination_outside_screen_is_clipped() {
        let mut ad = adapter();
        let id = two_tone(&mut ad);
        ad.copy_ex(id, None, Rect::new(-1, 7, 2, 1), 0.0, None, Flip::NONE)
            .unwrap();
        assert_eq!(ad.pixel(0, 7), BLUE);
        ad.copy_ex(id, None, Rect::new(100, 100, 2, 1), 0.0, None, Flip::NONE)
            .unwrap();
    }

    #[test]
    fn invalid_texture_and_uninitialized_renderer_fail() {
        let mut ad = adapter();
        assert!(ad
            .copy_ex(TextureId(99), None, Rect::new(0, 0, 1, 1), 0.0, None, Flip::NONE)
            .is_err());
        assert!(ad.set_texture_alpha_mod(TextureId(99), 1).is_err());
        let id = two_tone(&mut ad);
        ad.reset();
        assert!(ad
            .copy_ex(id, None, Rect::new(0, 0, 1, 1), 0.0, None, Flip::NONE)
            .is_err());
    }

    #[test]
    fn reset_destroys_live_textures_and_is_idempotent() {
        let mut ad = adapter();
        two_tone(&mut ad);
        two_tone(&mut ad);
        assert_eq!(ad.live_textures(), 2);
        ad.reset();
        assert_eq!(ad.live_textures(), 0);
        ad.reset();
        assert!(!ad.is_initialized());
    }

    #[test]
    fn present_snapshots_frame() {
        let mut ad = adapter();
        ad.clear(BLUE);
        ad.present();
        ad.clear(RED);
        assert_eq!(ad.frames_presented(), 1);
        assert_eq!(ad.presented().get_pixel(0, 0).0, BLUE.to_array());
    }
}
