// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! PixelLessons is a set of small 2D rendering lessons built on one shared core:
//! a hardware texture wrapper, sprite-sheet clipping, per-draw color/alpha
//! modulation, rotation and flipping, text textures, and a wall-clock driven
//! color cycle that runs independent of the present cadence.
//!
//! Every lesson is a Model + Render pair driven by the same Game loop:
//! init -> load media -> (drain events, update, compose, present)* -> close.
//!
//! Rendering goes through the Adapter trait. Two adapters are offered:
//! SoftAdapter, a headless CPU renderer that also works as a scripted test
//! double, and SdlAdapter (feature `sdl`) which opens a real SDL2 window.
//!
//! Release of every texture is guaranteed on every exit path: textures live in
//! the Context's TextureStore and Game::run always runs the close stage,
//! even when init or media loading failed.

/// screen width of every lesson window
pub const SCREEN_WIDTH: u32 = 640;
/// screen height of every lesson window
pub const SCREEN_HEIGHT: u32 = 480;

/// error taxonomy shared by all stages
pub mod error;

/// log4rs based logging
pub mod log;

/// lesson configuration, loaded from toml
pub mod config;

/// rect, points and path helpers
pub mod util;

/// unified input events and the non-blocking event drain
pub mod event;

/// timed color cycle state machine
pub mod animation;

/// texture store and batched media loading
pub mod asset;

/// public state of a running lesson, including the render adapter
pub mod context;

/// integrates model and render, encapsulates the main loop
pub mod game;

/// Render module.
/// adapter: window/renderer/event backend (soft, sdl).
/// texture: GpuTexture, an owned hardware texture with modulation state.
/// sprite: SpriteFrames, clip rects partitioning one texture.
/// compositor: issues draw calls and composes one frame.
/// image/text: decoded pixel data from image files and fonts.
/// style: colors, blend modes and flips.
pub mod render;

/// the tutorial programs
pub mod lessons;
