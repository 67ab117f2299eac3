// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! Utilities: Rect, PointI32 and asset path resolution.

use std::{
    env,
    fs::read_dir,
    io::{self, ErrorKind},
    path::{Path, PathBuf, MAIN_SEPARATOR},
};

/// get flag_file path...
pub fn get_project_root(flag_file: &str) -> io::Result<PathBuf> {
    let path = env::current_dir()?;
    for p in path.as_path().ancestors() {
        let mut entries = read_dir(p)?;
        let has_flag = entries.any(|e| e.map(|e| e.file_name() == *flag_file).unwrap_or(false));
        if has_flag {
            return Ok(PathBuf::from(p));
        }
    }
    Err(io::Error::new(
        ErrorKind::NotFound,
        "Ran out of places to find flag_file",
    ))
}

/// Gets the absolute path of the lessons root. In fact, it looks for where Cargo.toml locates,
/// falling back to the current directory.
pub fn get_lessons_root_path() -> String {
    match get_project_root("Cargo.toml") {
        Ok(p) => p.to_string_lossy().to_string(),
        Err(_e) => ".".to_string(),
    }
}

pub fn get_abs_path(fpath: &str) -> String {
    if Path::new(fpath).is_relative() {
        format!("{}{}{}", get_lessons_root_path(), MAIN_SEPARATOR, fpath)
    } else {
        fpath.to_string()
    }
}

/// Joins an asset location below asset_root, absolute locations are kept as is
pub fn asset_path(asset_root: &str, loc: &str) -> String {
    if Path::new(loc).is_absolute() || asset_root.is_empty() {
        loc.to_string()
    } else {
        Path::new(asset_root).join(loc).to_string_lossy().to_string()
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct PointI32 {
    pub x: i32,
    pub y: i32,
}

impl PointI32 {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned region in pixels.
/// Used both as a clip into a source texture and as a destination footprint.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Rect {
        Rect { x, y, w, h }
    }

    pub fn is_empty(self) -> bool {
        self.w == 0 || self.h == 0
    }

    pub fn left(self) -> i32 {
        self.x
    }

    pub fn right(self) -> i32 {
        self.x.saturating_add(self.w as i32)
    }

    pub fn top(self) -> i32 {
        self.y
    }

    pub fn bottom(self) -> i32 {
        self.y.saturating_add(self.h as i32)
    }

    /// Midpoint relative to the rect origin
    pub fn center(self) -> (f64, f64) {
        (self.w as f64 / 2.0, self.h as f64 / 2.0)
    }

    /// Overlap of two rects, None when they do not touch
    pub fn intersection(self, other: Rect) -> Option<Rect> {
        let x1 = self.left().max(other.left());
        let y1 = self.top().max(other.top());
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        if x2 <= x1 || y2 <= y1 {
            return None;
        }
        Some(Rect::new(x1, y1, (x2 - x1) as u32, (y2 - y1) as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = Rect::new(-10, 5, 30, 20);
        assert_eq!(r.right(), 20);
        assert_eq!(r.bottom(), 25);
        assert_eq!(r.center(), (15.0, 10.0));
    }

    #[test]
    fn rect_intersection() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(50, 80, 100, 100);
        assert_eq!(a.intersection(b), Some(Rect::new(50, 80, 50, 20)));
        assert_eq!(a.intersection(Rect::new(100, 0, 5, 5)), None);
        assert!(Rect::new(0, 0, 0, 4).is_empty());
    }

    #[test]
    fn asset_path_joins_relative() {
        let p = asset_path("assets", "dots.png");
        assert_eq!(Path::new(&p), Path::new("assets").join("dots.png"));
        assert_eq!(asset_path("", "dots.png"), "dots.png");
        #[cfg(unix)]
        assert_eq!(asset_path("assets", "/tmp/dots.png"), "/tmp/dots.png");
    }
}
