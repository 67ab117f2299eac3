// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! Text rasterization with fontdue.
//!
//! A TextFont is opened once at load time; render_text lays a single line out
//! on the font's baseline and returns RGBA pixels ready for upload,
//! coverage going into the alpha channel.

use crate::error::LoadError;
use crate::render::{image::RawImage, style::Color};
use fontdue::{Font, FontSettings};
use log::info;

pub struct TextFont {
    pub path: String,
    pub px: f32,
    font: Font,
}

impl TextFont {
    /// Loads a ttf/otf file at the given pixel size
    pub fn open(path: &str, px: f32) -> Result<Self, LoadError> {
        let data = std::fs::read(path).map_err(|e| LoadError::Decode {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        let font = Self::from_bytes(path, data, px)?;
        info!("font load:{} {}px", path, px);
        Ok(font)
    }

    pub fn from_bytes(name: &str, data: Vec<u8>, px: f32) -> Result<Self, LoadError> {
        let settings = FontSettings {
            scale: px,
            ..FontSettings::default()
        };
        let font = Font::from_bytes(data, settings).map_err(|e| LoadError::Decode {
            path: name.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            path: name.to_string(),
            px,
            font,
        })
    }

    /// Renders one line of text in the given color
    pub fn render_text(&self, text: &str, color: Color) -> Result<RawImage, LoadError> {
        let (ascent, descent) = match self.font.horizontal_line_metrics(self.px) {
            Some(lm) => (lm.ascent, lm.descent),
            None => (self.px, 0.0),
        };
        let baseline = ascent.ceil() as i32;
        let height = (ascent - descent).ceil().max(1.0) as u32;

        let mut glyphs = Vec::with_capacity(text.len());
        let mut pen = 0.0f32;
        for ch in text.chars() {
            let (metrics, coverage) = self.font.rasterize(ch, self.px);
            glyphs.push((pen.round() as i32, metrics, coverage));
            pen += metrics.advance_width;
        }
        let width = pen.ceil() as u32;
        if width == 0 {
            return Err(LoadError::Decode {
                path: self.path.clone(),
                reason: "text has zero width".to_string(),
            });
        }

        let mut img = RawImage::filled(width, height, Color::rgba(color.r, color.g, color.b, 0));
        for (x0, metrics, coverage) in glyphs {
            let gx = x0 + metrics.xmin;
            let gy = baseline - (metrics.height as i32 + metrics.ymin);
            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let x = gx + col as i32;
                    let y = gy + row as i32;
                    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
                        continue;
                    }
                    let cov = coverage[row * metrics.width + col] as u32;
                    let a = (cov * color.a as u32 / 255) as u8;
                    let i = ((y as u32 * width + x as u32) * 4 + 3) as usize;
                    img.pixels[i] = img.pixels[i].max(a);
                }
            }
        }
        Ok(img)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_font_is_decode_error() {
        let err = TextFont::from_bytes("bad.ttf", vec![1, 2, 3, 4], 28.0)
            .err()
            .unwrap();
        assert!(matches!(err, LoadError::Decode { .. }));
    }

    #[test]
    fn missing_font_file_is_decode_error() {
        let err = TextFont::open("no/such/lazy.ttf", 28.0).err().unwrap();
        assert_eq!(err.path(), "no/such/lazy.ttf");
    }
}
