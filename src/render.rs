// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! # Render module
//!
//! ## Submodules
//! - `adapter`: render adapter interface and backends (soft, sdl)
//! - `texture`: GpuTexture, one owned texture plus its modulation state
//! - `sprite`: SpriteFrames, clip rects over one texture
//! - `compositor`: FrameCompositor, draw calls composing one frame
//! - `image`: decoded pixels, chroma key
//! - `text`: text rasterization
//! - `style`: color, blend mode, flip

pub mod adapter;
pub mod compositor;
pub mod image;
pub mod sprite;
pub mod style;
pub mod text;
pub mod texture;

// re-export common types
pub use adapter::{Adapter, TextureId};
pub use compositor::{DrawOptions, FrameCompositor, FrameStats, Transform};
pub use image::{RawImage, CHROMA_KEY};
pub use sprite::SpriteFrames;
pub use style::{BlendMode, Color, Flip};
pub use text::TextFont;
pub use texture::GpuTexture;
