// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! FrameCompositor composes one frame out of flat draw calls.
//!
//! A frame is begin (clear) -> draw* -> finish (present). Each draw pushes
//! the texture's modulation state to the adapter and issues one copy_ex.
//! The destination size is the clip size if a clip is given, else the full
//! texture size. A failed draw is returned by draw; draw_or_skip logs it and
//! carries on, leaving that sprite out of the current frame.

use crate::{
    error::{InertResourceError, RenderError},
    render::{adapter::Adapter, style::Color, style::Flip, texture::GpuTexture},
    util::{PointI32, Rect},
};
use log::{debug, error};

/// Rotation in degrees clockwise plus mirroring. Default is identity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub angle: f64,
    pub flip: Flip,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        angle: 0.0,
        flip: Flip::NONE,
    };

    pub fn new(angle: f64, flip: Flip) -> Self {
        Self { angle, flip }
    }

    /// Angle folded into [0, 360)
    pub fn normalized(self) -> Self {
        Self {
            angle: self.angle.rem_euclid(360.0),
            flip: self.flip,
        }
    }

    pub fn is_identity(self) -> bool {
        let n = self.normalized();
        n.angle == 0.0 && n.flip.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DrawOptions {
    pub clip: Option<Rect>,
    pub transform: Transform,
    /// Rotation center relative to the destination, None is its midpoint
    pub center: Option<PointI32>,
}

impl DrawOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clip(mut self, clip: Rect) -> Self {
        self.clip = Some(clip);
        self
    }

    pub fn angle(mut self, angle: f64) -> Self {
        self.transform.angle = angle;
        self
    }

    pub fn flip(mut self, flip: Flip) -> Self {
        self.transform.flip = flip;
        self
    }

    pub fn center(mut self, center: PointI32) -> Self {
        self.center = Some(center);
        self
    }

    pub fn transform(mut self, t: Transform) -> Self {
        self.transform = t;
        self
    }
}

/// Destination footprint of a draw at (x, y)
pub fn dest_rect(
    texture: &GpuTexture,
    x: i32,
    y: i32,
    clip: Option<Rect>,
) -> Result<Rect, InertResourceError> {
    texture.handle("draw")?;
    let (w, h) = match clip {
        Some(c) => (c.w, c.h),
        None => (texture.width(), texture.height()),
    };
    Ok(Rect::new(x, y, w, h))
}

/// Origin that centers a size x size area inside area
pub fn center_origin(area: (u32, u32), size: (u32, u32)) -> (i32, i32) {
    (
        (area.0 as i32 - size.0 as i32) / 2,
        (area.1 as i32 - size.1 as i32) / 2,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub drawn: usize,
    pub skipped: usize,
}

pub struct FrameCompositor<'a> {
    adapter: &'a mut dyn Adapter,
    stats: FrameStats,
}

impl<'a> FrameCompositor<'a> {
    /// Starts a frame cleared to color
    pub fn begin(adapter: &'a mut dyn Adapter, color: Color) -> Self {
        adapter.clear(color);
        Self {
            adapter,
            stats: FrameStats::default(),
        }
    }

    pub fn draw(
        &mut self,
        texture: &GpuTexture,
        x: i32,
        y: i32,
        opts: &DrawOptions,
    ) -> Result<Rect, RenderError> {
        let id = texture.handle("draw")?;
        let dst = dest_rect(texture, x, y, opts.clip)?;
        let t = opts.transform.normalized();
        let (r, g, b) = texture.color_mod();
        self.adapter
            .set_texture_color_mod(id, r, g, b)
            .map_err(RenderError::Backend)?;
        self.adapter
            .set_texture_alpha_mod(id, texture.alpha_mod())
            .map_err(RenderError::Backend)?;
        self.adapter
            .set_texture_blend_mode(id, texture.blend_mode())
            .map_err(RenderError::Backend)?;
        self.adapter
            .copy_ex(id, opts.clip, dst, t.angle, opts.center, t.flip)
            .map_err(RenderError::Backend)?;
        self.stats.drawn += 1;
        Ok(dst)
    }

    /// Like draw, but a failure is only logged
    pub fn draw_or_skip(&mut self, texture: &GpuTexture, x: i32, y: i32, opts: &DrawOptions) -> bool {
        match self.draw(texture, x, y, opts) {
            Ok(_) => true,
            Err(e) => {
                error!("{} ({})", e, texture.source());
                self.stats.skipped += 1;
                false
            }
        }
    }

    /// Presents the composed frame
    pub fn finish(self) -> FrameStats {
        self.adapter.present();
        debug!(
            "frame presented drawn={} skipped={}",
            self.stats.drawn, self.stats.skipped
        );
        self.stats
    }
}
