// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! Decoded pixel data, the form every image reaches the adapter in.
//!
//! BMP and PNG files are decoded with the image crate into RGBA8.
//! Before upload the chroma key color is made fully transparent.

use crate::error::LoadError;
use crate::render::style::Color;
use log::debug;

/// Pixels of this color become transparent on load
pub const CHROMA_KEY: Color = Color::rgb(0, 0xFF, 0xFF);

/// RGBA8 pixels, row major, no padding
#[derive(Debug, Clone, PartialEq)]
pub struct RawImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RawImage {
    /// Solid image, mainly for tests and placeholders
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            pixels.extend_from_slice(&color.to_array());
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        if pixels.len() != (width as usize) * (height as usize) * 4 {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn pitch(&self) -> usize {
        self.width as usize * 4
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let i = ((y * self.width + x) * 4) as usize;
        Color::rgba(
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        )
    }

    /// Makes every pixel whose rgb equals key fully transparent,
    /// returns how many pixels were keyed
    pub fn apply_color_key(&mut self, key: Color) -> usize {
        let mut keyed = 0;
        for px in self.pixels.chunks_exact_mut(4) {
            if px[0] == key.r && px[1] == key.g && px[2] == key.b {
                px[3] = 0;
                keyed += 1;
            }
        }
        keyed
    }
}

/// Decodes an image file into RGBA8 pixels
pub fn decode_file(path: &str) -> Result<RawImage, LoadError> {
    let img = image::open(path).map_err(|e| LoadError::Decode {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    debug!("decode {} {}x{}", path, width, height);
    Ok(RawImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_key_clears_alpha_only_on_exact_match() {
        let mut img = RawImage::filled(2, 1, CHROMA_KEY);
        img.pixels[4..8].copy_from_slice(&[0, 0xFF, 0xFE, 0xFF]);
        assert_eq!(img.apply_color_key(CHROMA_KEY), 1);
        assert_eq!(img.pixel(0, 0), Color::rgba(0, 0xFF, 0xFF, 0));
        assert_eq!(img.pixel(1, 0), Color::rgba(0, 0xFF, 0xFE, 0xFF));
    }

    #[test]
    fn from_rgba_checks_length() {
        assert!(RawImage::from_rgba(2, 2, vec![0; 16]).is_some());
        assert!(RawImage::from_rgba(2, 2, vec![0; 15]).is_none());
    }

    #[test]
    fn decode_missing_file_is_decode_error() {
        let err = decode_file("no/such/file.png").unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
        assert_eq!(err.path(), "no/such/file.png");
    }

    #[test]
    fn decode_written_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p.png");
        let mut img = image::RgbaImage::new(3, 2);
        img.put_pixel(2, 1, image::Rgba([1, 2, 3, 255]));
        img.save(&path).unwrap();
        let raw = decode_file(path.to_str().unwrap()).unwrap();
        assert_eq!((raw.width, raw.height), (3, 2));
        assert_eq!(raw.pixel(2, 1), Color::rgba(1, 2, 3, 255));
    }
}
