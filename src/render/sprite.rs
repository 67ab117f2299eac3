// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! SpriteFrames partitions one texture into index addressed clip rects.
//! The table is defined once after its texture loads; defining it again
//! replaces the whole table.

use crate::{error::IndexOutOfRange, util::Rect};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpriteFrames {
    frames: Vec<Rect>,
}

impl SpriteFrames {
    pub fn new() -> Self {
        Self { frames: vec![] }
    }

    pub fn define_frames(&mut self, rects: Vec<Rect>) {
        self.frames = rects;
    }

    pub fn frame_at(&self, index: usize) -> Result<Rect, IndexOutOfRange> {
        self.frames.get(index).copied().ok_or(IndexOutOfRange {
            index,
            len: self.frames.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rect> {
        self.frames.iter()
    }
}

/// Row major grid of cols x rows cells of w x h, starting at the sheet origin
pub fn grid(cols: u32, rows: u32, w: u32, h: u32) -> Vec<Rect> {
    let mut rects = Vec::with_capacity((cols * rows) as usize);
    for r in 0..rows {
        for c in 0..cols {
            rects.push(Rect::new((c * w) as i32, (r * h) as i32, w, h));
        }
    }
    rects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_row_major() {
        let g = grid(2, 2, 100, 100);
        assert_eq!(g[0], Rect::new(0, 0, 100, 100));
        assert_eq!(g[1], Rect::new(100, 0, 100, 100));
        assert_eq!(g[2], Rect::new(0, 100, 100, 100));
        assert_eq!(g[3], Rect::new(100, 100, 100, 100));
    }

    #[test]
    fn lookup_past_end_fails() {
        let mut sf = SpriteFrames::new();
        assert_eq!(sf.frame_at(0), Err(IndexOutOfRange { index: 0, len: 0 }));
        sf.define_frames(grid(2, 2, 100, 100));
        assert_eq!(sf.len(), 4);
        assert_eq!(sf.frame_at(3).unwrap(), Rect::new(100, 100, 100, 100));
        assert_eq!(sf.frame_at(4), Err(IndexOutOfRange { index: 4, len: 4 }));
    }

    #[test]
    fn redefinition_replaces_table() {
        let mut sf = SpriteFrames::new();
        sf.define_frames(grid(2, 2, 10, 10));
        sf.define_frames(vec![Rect::new(5, 5, 1, 1)]);
        assert_eq!(sf.len(), 1);
        assert_eq!(sf.frame_at(0).unwrap(), Rect::new(5, 5, 1, 1));
        assert!(sf.frame_at(1).is_err());
    }
}
