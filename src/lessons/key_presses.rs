// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! Five images, one per key action. Arrow keys select up/down/left/right,
//! any other key goes back to the default image.
//!
//! Actions map to texture slots through a table filled at load time, the
//! lookup is checked and fails with IndexOutOfRange instead of indexing
//! blindly.

use crate::{
    context::Context,
    error::{IndexOutOfRange, LoadError},
    event::{Event, KeyCode},
    game::{Model, Render},
    render::{style::Color, DrawOptions, FrameCompositor},
};
use log::{debug, error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPressSurface {
    Default,
    Up,
    Down,
    Left,
    Right,
}

impl KeyPressSurface {
    pub const ALL: [KeyPressSurface; 5] = [
        KeyPressSurface::Default,
        KeyPressSurface::Up,
        KeyPressSurface::Down,
        KeyPressSurface::Left,
        KeyPressSurface::Right,
    ];

    pub fn from_key(code: KeyCode) -> Self {
        match code {
            KeyCode::Up => KeyPressSurface::Up,
            KeyCode::Down => KeyPressSurface::Down,
            KeyCode::Left => KeyPressSurface::Left,
            KeyCode::Right => KeyPressSurface::Right,
            _ => KeyPressSurface::Default,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            KeyPressSurface::Default => "press",
            KeyPressSurface::Up => "up",
            KeyPressSurface::Down => "down",
            KeyPressSurface::Left => "left",
            KeyPressSurface::Right => "right",
        }
    }

    pub fn asset(self) -> &'static str {
        match self {
            KeyPressSurface::Default => "key_presses/press.bmp",
            KeyPressSurface::Up => "key_presses/up.bmp",
            KeyPressSurface::Down => "key_presses/down.bmp",
            KeyPressSurface::Left => "key_presses/left.bmp",
            KeyPressSurface::Right => "key_presses/right.bmp",
        }
    }
}

pub struct KeyPressesModel {
    pub current: KeyPressSurface,
    // texture name per action index
    slots: Vec<&'static str>,
}

impl KeyPressesModel {
    pub fn new() -> Self {
        Self {
            current: KeyPressSurface::Default,
            slots: vec![],
        }
    }

    /// Texture name shown for action s
    pub fn slot(&self, s: KeyPressSurface) -> Result<&'static str, IndexOutOfRange> {
        self.slots.get(s.index()).copied().ok_or(IndexOutOfRange {
            index: s.index(),
            len: self.slots.len(),
        })
    }
}

impl Default for KeyPressesModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for KeyPressesModel {
    fn init(&mut self, ctx: &mut Context) -> Result<(), LoadError> {
        let entries: Vec<(&str, &str)> = KeyPressSurface::ALL
            .iter()
            .map(|s| (s.name(), s.asset()))
            .collect();
        ctx.load_batch(&entries)?;
        self.slots = KeyPressSurface::ALL.iter().map(|s| s.name()).collect();
        Ok(())
    }

    fn handle_event(&mut self, ctx: &mut Context, _dt: f32) {
        for e in &ctx.input_events {
            if let Event::Key(key) = e {
                self.current = KeyPressSurface::from_key(key.code);
                debug!("key {:?} selects {:?}", key.code, self.current);
            }
        }
    }

    fn handle_timer(&mut self, _ctx: &mut Context, _dt: f32) {}
}

pub struct KeyPressesRender;

impl KeyPressesRender {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KeyPressesRender {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for KeyPressesRender {
    type Model = KeyPressesModel;

    fn draw(&mut self, ctx: &mut Context, model: &mut KeyPressesModel, _dt: f32) {
        let mut fc = FrameCompositor::begin(ctx.adapter.as_mut(), Color::WHITE);
        match model.slot(model.current) {
            Ok(name) => {
                if let Some(t) = ctx.textures.get(name) {
                    fc.draw_or_skip(t, 0, 0, &DrawOptions::new());
                }
            }
            Err(e) => error!("{:?} has no image: {}", model.current, e),
        }
        fc.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_select_and_other_keys_reset() {
        assert_eq!(KeyPressSurface::from_key(KeyCode::Left), KeyPressSurface::Left);
        assert_eq!(KeyPressSurface::from_key(KeyCode::Char('z')), KeyPressSurface::Default);
        assert_eq!(KeyPressSurface::from_key(KeyCode::Enter), KeyPressSurface::Default);
    }

    #[test]
    fn lookup_before_load_is_out_of_range() {
        let m = KeyPressesModel::new();
        assert_eq!(
            m.slot(KeyPressSurface::Right),
            Err(IndexOutOfRange { index: 4, len: 0 })
        );
    }

    #[test]
    fn indices_follow_declaration_order() {
        for (i, s) in KeyPressSurface::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
    }
}
