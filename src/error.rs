// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! Error types for every stage of a lesson.
//!
//! InitError is fatal to startup, LoadError gates the main loop,
//! RenderError is swallowed at the draw-call boundary and only logged,
//! InertResourceError marks misuse of a released or never loaded texture,
//! IndexOutOfRange is returned by sprite frame and selection lookups.

use std::fmt;

/// Subsystem, window or renderer creation failed.
#[derive(Debug, Clone, PartialEq)]
pub enum InitError {
    Subsystem(String),
    Window(String),
    Renderer(String),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::Subsystem(msg) => write!(f, "subsystem could not initialize: {}", msg),
            InitError::Window(msg) => write!(f, "window could not be created: {}", msg),
            InitError::Renderer(msg) => write!(f, "renderer could not be created: {}", msg),
        }
    }
}

impl std::error::Error for InitError {}

/// A single asset failed to load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The file could not be read or decoded into pixels.
    Decode { path: String, reason: String },
    /// The decoded pixels could not be turned into a texture.
    Upload { path: String, reason: String },
}

impl LoadError {
    pub fn path(&self) -> &str {
        match self {
            LoadError::Decode { path, .. } | LoadError::Upload { path, .. } => path,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Decode { path, reason } => {
                write!(f, "unable to load image {}: {}", path, reason)
            }
            LoadError::Upload { path, reason } => {
                write!(f, "unable to create texture from {}: {}", path, reason)
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// An operation needed a loaded texture but the wrapper is inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InertResourceError {
    pub op: &'static str,
}

impl fmt::Display for InertResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} called on a texture that owns no resource", self.op)
    }
}

impl std::error::Error for InertResourceError {}

/// One draw call failed.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    InertResource(InertResourceError),
    Backend(String),
}

impl From<InertResourceError> for RenderError {
    fn from(err: InertResourceError) -> RenderError {
        RenderError::InertResource(err)
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InertResource(e) => write!(f, "failed to render texture: {}", e),
            RenderError::Backend(msg) => write!(f, "failed to render texture: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Lookup past the end of a fixed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} out of range for table of {}", self.index, self.len)
    }
}

impl std::error::Error for IndexOutOfRange {}

/// Configuration file could not be read or parsed.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> ConfigError {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> ConfigError {
        ConfigError::Parse(err)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "read config error: {}", e),
            ConfigError::Parse(e) => write!(f, "parse config error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inert_error_converts_into_render_error() {
        let e: RenderError = InertResourceError { op: "draw" }.into();
        assert_eq!(e, RenderError::InertResource(InertResourceError { op: "draw" }));
        assert!(e.to_string().contains("draw"));
    }

    #[test]
    fn load_error_keeps_path() {
        let e = LoadError::Upload {
            path: "a/b.png".to_string(),
            reason: "no memory".to_string(),
        };
        assert_eq!(e.path(), "a/b.png");
        assert_eq!(e.to_string(), "unable to create texture from a/b.png: no memory");
    }
}
