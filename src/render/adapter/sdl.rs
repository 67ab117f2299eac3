// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! Implements the Adapter trait on SDL2: a real window, an accelerated
//! renderer and the SDL event pump. All SDL related processing is handled here.
//!
//! Textures are created with the `unsafe_textures` feature of the sdl2 crate,
//! so they carry no lifetime and must be destroyed explicitly. The adapter
//! keeps every live texture in a map; reset destroys whatever is left before
//! dropping renderer, window and the SDL context.

use crate::{
    error::InitError,
    event::{Event, KeyCode, KeyEvent},
    render::{
        adapter::{Adapter, TextureId},
        image::RawImage,
        style::{BlendMode, Color, Flip},
    },
    util::{PointI32, Rect},
};
use log::{info, warn};
use sdl2::{
    event::Event as SEvent,
    keyboard::Keycode as SKeycode,
    pixels::{Color as SColor, PixelFormatEnum},
    rect::{Point as SPoint, Rect as SRect},
    render::{BlendMode as SBlendMode, Texture, TextureCreator, WindowCanvas},
    video::WindowContext,
    EventPump, Sdl,
};
use std::any::Any;
use std::collections::HashMap;

// RGBA bytes in memory
#[cfg(target_endian = "little")]
const RGBA_BYTES: PixelFormatEnum = PixelFormatEnum::ABGR8888;
#[cfg(target_endian = "big")]
const RGBA_BYTES: PixelFormatEnum = PixelFormatEnum::RGBA8888;

pub struct SdlAdapter {
    pub sdl_context: Option<Sdl>,
    pub canvas: Option<WindowCanvas>,
    pub texture_creator: Option<TextureCreator<WindowContext>>,
    pub event_pump: Option<EventPump>,
    textures: HashMap<TextureId, Texture>,
    next_id: u32,
}

impl Default for SdlAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl SdlAdapter {
    pub fn new() -> Self {
        Self {
            sdl_context: None,
            canvas: None,
            texture_creator: None,
            event_pump: None,
            textures: HashMap::new(),
            next_id: 1,
        }
    }

    fn texture_mut(&mut self, id: TextureId) -> Result<&mut Texture, String> {
        self.textures
            .get_mut(&id)
            .ok_or_else(|| format!("invalid texture {}", id.0))
    }
}

impl Drop for SdlAdapter {
    fn drop(&mut self) {
        self.reset();
    }
}

fn sdl_rect(r: Rect) -> SRect {
    SRect::new(r.x, r.y, r.w, r.h)
}

fn sdl_blend(mode: BlendMode) -> SBlendMode {
    match mode {
        BlendMode::None => SBlendMode::None,
        BlendMode::Blend => SBlendMode::Blend,
        BlendMode::Add => SBlendMode::Add,
        BlendMode::Mod => SBlendMode::Mod,
    }
}

impl Adapter for SdlAdapter {
    fn init(&mut self, title: &str, width: u32, height: u32, vsync: bool) -> Result<(), InitError> {
        let sdl_context = sdl2::init().map_err(InitError::Subsystem)?;
        let video_subsystem = sdl_context.video().map_err(InitError::Subsystem)?;

        // Set texture filtering to linear
        if !sdl2::hint::set("SDL_RENDER_SCALE_QUALITY", "1") {
            warn!("Linear texture filtering not enabled!");
        }

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| InitError::Window(e.to_string()))?;

        let mut builder = window.into_canvas().accelerated();
        if vsync {
            builder = builder.present_vsync();
        }
        let mut canvas = builder
            .build()
            .map_err(|e| InitError::Renderer(e.to_string()))?;
        canvas.set_draw_color(SColor::RGBA(0xFF, 0xFF, 0xFF, 0xFF));

        let event_pump = sdl_context.event_pump().map_err(InitError::Subsystem)?;
        self.texture_creator = Some(canvas.texture_creator());
        self.canvas = Some(canvas);
        self.event_pump = Some(event_pump);
        self.sdl_context = Some(sdl_context);
        info!("Window & renderer init ok {}x{} vsync={}", width, height, vsync);
        Ok(())
    }

    fn reset(&mut self) {
        let n = self.textures.len();
        for (_, tex) in self.textures.drain() {
            // SAFETY: the renderer that created tex is still alive here
            unsafe { tex.destroy() };
        }
        if n > 0 {
            info!("sdl destroys {} live textures", n);
        }
        self.texture_creator = None;
        self.canvas = None;
        self.event_pump = None;
        self.sdl_context = None;
    }

    fn poll_event(&mut self) -> Option<Event> {
        let ep = self.event_pump.as_mut()?;
        // skip sdl events without a counterpart
        while let Some(e) = ep.poll_event() {
            if let Some(et) = input_events_from_sdl(&e) {
                return Some(et);
            }
        }
        None
    }

    fn create_texture(&mut self, image: &RawImage) -> Result<TextureId, String> {
        let tc = self
            .texture_creator
            .as_ref()
            .ok_or_else(|| "renderer is not initialized".to_string())?;
        let mut tex = tc
            .create_texture_static(RGBA_BYTES, image.width, image.height)
            .map_err(|e| e.to_string())?;
        if let Err(e) = tex.update(None, &image.pixels, image.pitch()) {
            // SAFETY: tex was never handed out
            unsafe { tex.destroy() };
            return Err(e.to_string());
        }
        let id = TextureId(self.next_id);
        self.next_id += 1;
        self.textures.insert(id, tex);
        Ok(id)
    }

    fn destroy_texture(&mut self, id: TextureId) {
        if let Some(tex) = self.textures.remove(&id) {
            // SAFETY: removed from the map, no other reference exists
            unsafe { tex.destroy() };
        }
    }

    fn set_texture_color_mod(&mut self, id: TextureId, r: u8, g: u8, b: u8) -> Result<(), String> {
        self.texture_mut(id)?.set_color_mod(r, g, b);
        Ok(())
    }

    fn set_texture_alpha_mod(&mut self, id: TextureId, a: u8) -> Result<(), String> {
        self.texture_mut(id)?.set_alpha_mod(a);
        Ok(())
    }

    fn set_texture_blend_mode(&mut self, id: TextureId, mode: BlendMode) -> Result<(), String> {
        self.texture_mut(id)?.set_blend_mode(sdl_blend(mode));
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
        let tex = self
            .textures
            .get(&id)
            .ok_or_else(|| format!("invalid texture {}", id.0))?;
        let canvas = self
            .canvas
            .as_mut()
            .ok_or_else(|| "renderer is not initialized".to_string())?;
        canvas.copy_ex(
            tex,
            src.map(sdl_rect),
            Some(sdl_rect(dst)),
            angle,
            center.map(|p| SPoint::new(p.x, p.y)),
            flip.horizontal(),
            flip.vertical(),
        )
    }

    fn clear(&mut self, color: Color) {
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.set_draw_color(SColor::RGBA(color.r, color.g, color.b, color.a));
            canvas.clear();
        }
    }

    fn present(&mut self) {
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.present();
        }
    }

    fn live_textures(&self) -> usize {
        self.textures.len()
    }

    fn as_any(&mut self) -> &mut dyn Any {
        self
    }
}

fn keycode_char(k: SKeycode) -> Option<char> {
    let name = k.name();
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphanumeric() => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}

/// Convert sdl events to unified events. Only quit and key down are kept.
pub fn input_events_from_sdl(e: &SEvent) -> Option<Event> {
    match e {
        SEvent::Quit { .. } => Some(Event::Quit),
        SEvent::KeyDown {
            keycode: Some(k),
            repeat,
            ..
        } => {
            let code = match *k {
                SKeycode::Up => KeyCode::Up,
                SKeycode::Down => KeyCode::Down,
                SKeycode::Left => KeyCode::Left,
                SKeycode::Right => KeyCode::Right,
                SKeycode::Return => KeyCode::Enter,
                SKeycode::Escape => KeyCode::Esc,
                SKeycode::Space => KeyCode::Char(' '),
                other => keycode_char(other).map_or(KeyCode::Other, KeyCode::Char),
            };
            Some(Event::Key(KeyEvent {
                code,
                repeat: *repeat,
            }))
        }
        _ => None,
    }
}
