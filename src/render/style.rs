// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! Defines drawing attributes: color, blend mode and flip.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl Color {
    pub const WHITE: Color = Color::rgba(0xFF, 0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    pub fn rgb_tuple(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub fn to_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// How a drawn texel combines with the framebuffer, same formulas as SDL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BlendMode {
    /// dstRGBA = srcRGBA
    #[default]
    None,
    /// dstRGB = srcRGB * srcA + dstRGB * (1 - srcA), dstA = srcA + dstA * (1 - srcA)
    Blend,
    /// dstRGB = srcRGB * srcA + dstRGB
    Add,
    /// dstRGB = srcRGB * dstRGB
    Mod,
}

bitflags! {
    /// Mirror axes applied to the sampled region.
    /// Flipping twice along the same axis cancels out: `f ^ f == Flip::NONE`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flip: u8 {
        const NONE       = 0b0000_0000;
        const HORIZONTAL = 0b0000_0001;
        const VERTICAL   = 0b0000_0010;
    }
}

impl Default for Flip {
    fn default() -> Self {
        Flip::NONE
    }
}

impl Flip {
    pub fn horizontal(self) -> bool {
        self.contains(Flip::HORIZONTAL)
    }

    pub fn vertical(self) -> bool {
        self.contains(Flip::VERTICAL)
    }

    /// Applies another flip on top of this one
    pub fn then(self, other: Flip) -> Flip {
        self ^ other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_flip_is_identity() {
        for f in [Flip::NONE, Flip::HORIZONTAL, Flip::VERTICAL, Flip::all()] {
            assert_eq!(f.then(f), Flip::NONE);
        }
        assert_eq!(Flip::HORIZONTAL.then(Flip::VERTICAL), Flip::all());
    }

    #[test]
    fn defaults() {
        assert_eq!(Color::default(), Color::rgb(255, 255, 255));
        assert_eq!(BlendMode::default(), BlendMode::None);
        assert!(Flip::default().is_empty());
    }
}
