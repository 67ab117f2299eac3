// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! GpuTexture owns one texture living in the render adapter.
//!
//! A wrapper is either owning (holds a TextureId, width and height are the
//! uploaded size) or inert (no id, 0x0). Every load first releases what the
//! wrapper owned, so at most one texture is held at a time, and a failed load
//! leaves the wrapper inert.
//!
//! Modulation state (color, alpha, blend mode) is kept here and pushed to
//! the adapter by the compositor on every draw.

use crate::{
    error::{InertResourceError, LoadError, RenderError},
    render::{
        adapter::{Adapter, TextureId},
        compositor::{DrawOptions, FrameCompositor},
        image::{decode_file, RawImage, CHROMA_KEY},
        style::{BlendMode, Color},
        text::TextFont,
    },
    util::Rect,
};
use log::{debug, info, warn};

#[derive(Debug, PartialEq)]
pub struct GpuTexture {
    id: Option<TextureId>,
    width: u32,
    height: u32,
    color_mod: (u8, u8, u8),
    alpha_mod: u8,
    blend_mode: BlendMode,
    source: String,
}

impl Default for GpuTexture {
    fn default() -> Self {
        Self::new()
    }
}

impl GpuTexture {
    /// An inert wrapper
    pub fn new() -> Self {
        Self {
            id: None,
            width: 0,
            height: 0,
            color_mod: (0xFF, 0xFF, 0xFF),
            alpha_mod: 0xFF,
            blend_mode: BlendMode::None,
            source: String::new(),
        }
    }

    /// Decodes an image file, keys out CHROMA_KEY and uploads it
    pub fn load(&mut self, adapter: &mut dyn Adapter, path: &str) -> Result<(), LoadError> {
        self.release(adapter);
        let mut img = decode_file(path)?;
        let keyed = img.apply_color_key(CHROMA_KEY);
        debug!("{} keyed {} pixels", path, keyed);
        self.upload(adapter, path, &img)
    }

    /// Uploads already decoded pixels as they are
    pub fn load_from_image(
        &mut self,
        adapter: &mut dyn Adapter,
        name: &str,
        img: &RawImage,
    ) -> Result<(), LoadError> {
        self.release(adapter);
        self.upload(adapter, name, img)
    }

    /// Rasterizes one line of text and uploads it
    pub fn load_from_text(
        &mut self,
        adapter: &mut dyn Adapter,
        font: &TextFont,
        text: &str,
        color: Color,
    ) -> Result<(), LoadError> {
        self.release(adapter);
        let img = font.render_text(text, color)?;
        self.upload(adapter, &font.path, &img)
    }

    fn upload(&mut self, adapter: &mut dyn Adapter, name: &str, img: &RawImage) -> Result<(), LoadError> {
        let upload_err = |reason: String| LoadError::Upload {
            path: name.to_string(),
            reason,
        };
        let id = adapter.create_texture(img).map_err(upload_err)?;
        if let Err(reason) = adapter.set_texture_blend_mode(id, BlendMode::Blend) {
            adapter.destroy_texture(id);
            return Err(upload_err(reason));
        }
        self.id = Some(id);
        self.width = img.width;
        self.height = img.height;
        self.color_mod = (0xFF, 0xFF, 0xFF);
        self.alpha_mod = 0xFF;
        self.blend_mode = BlendMode::Blend;
        self.source = name.to_string();
        info!("texture {} load:{} {}x{}", id.0, name, img.width, img.height);
        Ok(())
    }

    /// Destroys the owned texture if any and returns to the inert state
    pub fn release(&mut self, adapter: &mut dyn Adapter) {
        if let Some(id) = self.id.take() {
            adapter.destroy_texture(id);
            info!("texture {} release:{}", id.0, self.source);
        }
        *self = Self::new();
    }

    pub fn set_color(&mut self, r: u8, g: u8, b: u8) -> Result<(), InertResourceError> {
        self.handle("set_color")?;
        self.color_mod = (r, g, b);
        Ok(())
    }

    pub fn set_alpha(&mut self, a: u8) -> Result<(), InertResourceError> {
        self.handle("set_alpha")?;
        self.alpha_mod = a;
        Ok(())
    }

    pub fn set_blend_mode(&mut self, mode: BlendMode) -> Result<(), InertResourceError> {
        self.handle("set_blend_mode")?;
        self.blend_mode = mode;
        Ok(())
    }

    /// Draws through the compositor, see FrameCompositor::draw
    pub fn draw(
        &self,
        compositor: &mut FrameCompositor,
        x: i32,
        y: i32,
        opts: &DrawOptions,
    ) -> Result<Rect, RenderError> {
        compositor.draw(self, x, y, opts)
    }

    /// The owned id, or InertResourceError naming op
    pub fn handle(&self, op: &'static str) -> Result<TextureId, InertResourceError> {
        self.id.ok_or(InertResourceError { op })
    }

    pub fn id(&self) -> Option<TextureId> {
        self.id
    }

    pub fn is_loaded(&self) -> bool {
        self.id.is_some()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn color_mod(&self) -> (u8, u8, u8) {
        self.color_mod
    }

    pub fn alpha_mod(&self) -> u8 {
        self.alpha_mod
    }

    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Drop for GpuTexture {
    fn drop(&mut self) {
        if let Some(id) = self.id {
            warn!(
                "texture {} ({}) dropped while owning, left to adapter reset",
                id.0, self.source
            );
        }
    }
}
