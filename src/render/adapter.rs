// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! # Render Adapter Module
//!
//! The window, renderer and event queue are an external collaborator of the
//! lesson core. This module defines the interface all of them are reached
//! through, so the same lesson runs on a real SDL2 window or headless.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │          Game Loop (drain, update, draw)      │
//! │   ┌──────────┐   events   ┌──────────────┐    │
//! │   │  Model   │◄──────────►│    Render    │    │
//! │   └──────────┘            └──────────────┘    │
//! │                  GpuTexture / FrameCompositor │
//! └──────────────────────┬───────────────────────┘
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │               Adapter Interface              │
//! │   ┌───────────────────┬──────────────────┐   │
//! │   │    SoftAdapter    │    SdlAdapter    │   │
//! │   │ (cpu, headless)   │ (feature = sdl)  │   │
//! │   └───────────────────┴──────────────────┘   │
//! └──────────────────────────────────────────────┘
//! ```

use crate::{
    error::InitError,
    event::Event,
    render::{
        image::RawImage,
        style::{BlendMode, Color, Flip},
    },
    util::{PointI32, Rect},
};
use std::any::Any;

/// Headless CPU renderer with a scripted event queue
pub mod soft;

/// SDL adapter module - Desktop rendering backend based on SDL2
#[cfg(sdl_backend)]
pub mod sdl;

/// Opaque handle of a texture owned by an adapter.
/// Only the adapter that issued it can interpret it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

/// Adapter Interface Definition
///
/// One draw call is `copy_ex`, with SDL_RenderCopyEx semantics: `src` is the
/// sampled region of the texture (None = whole texture), `dst` the screen
/// footprint, `angle` degrees clockwise around `center` (relative to `dst`,
/// None = midpoint of `dst`), `flip` mirrors the sampled content.
pub trait Adapter {
    /// Create window and renderer
    fn init(&mut self, title: &str, width: u32, height: u32, vsync: bool) -> Result<(), InitError>;

    /// Destroy every live texture, then renderer and window. Idempotent.
    fn reset(&mut self);

    /// Next pending input event, never blocks
    fn poll_event(&mut self) -> Option<Event>;

    /// Upload decoded pixels
    fn create_texture(&mut self, image: &RawImage) -> Result<TextureId, String>;

    /// Release a texture, unknown ids are ignored
    fn destroy_texture(&mut self, id: TextureId);

    fn set_texture_color_mod(&mut self, id: TextureId, r: u8, g: u8, b: u8) -> Result<(), String>;

    fn set_texture_alpha_mod(&mut self, id: TextureId, a: u8) -> Result<(), String>;

    fn set_texture_blend_mode(&mut self, id: TextureId, mode: BlendMode) -> Result<(), String>;

    fn copy_ex(
        &mut self,
        id: TextureId,
        src: Option<Rect>,
        dst: Rect,
        angle: f64,
        center: Option<PointI32>,
        flip: Flip,
    ) -> Result<(), String>;

    /// Fill the whole render target
    fn clear(&mut self, color: Color);

    /// Show the composed frame
    fn present(&mut self);

    /// Number of textures currently alive in this adapter
    fn live_textures(&self) -> usize;

    fn as_any(&mut self) -> &mut dyn Any;
}
