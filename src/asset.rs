// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! Asset module provides the texture store of a running lesson.
//!
//! TextureStore owns every GpuTexture by name. Textures are looked up by
//! name or by the index they were loaded at; release_all frees them all and
//! is called by the close stage on every exit path.

use crate::{
    error::LoadError,
    render::{adapter::Adapter, texture::GpuTexture},
};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a batch of loads is judged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadPolicy {
    /// Every entry must load, a failure releases the whole batch
    #[default]
    AllOrNothing,
    /// Succeeds if at least one entry loaded
    AnySucceeds,
}

pub struct TextureStore {
    pub textures: Vec<GpuTexture>,
    pub textures_index: HashMap<String, usize>,
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            textures: vec![],
            textures_index: HashMap::new(),
        }
    }

    /// Slot named name, created inert if missing
    pub fn slot(&mut self, name: &str) -> &mut GpuTexture {
        let idx = match self.textures_index.get(name) {
            Some(idx) => *idx,
            None => {
                self.textures.push(GpuTexture::new());
                let idx = self.textures.len() - 1;
                self.textures_index.insert(name.to_string(), idx);
                idx
            }
        };
        &mut self.textures[idx]
    }

    /// Loads path into the slot named name, replacing what it held
    pub fn load(&mut self, adapter: &mut dyn Adapter, name: &str, path: &str) -> Result<(), LoadError> {
        self.slot(name).load(adapter, path)
    }

    /// Loads every (name, path) entry in order.
    /// Returns how many entries loaded.
    pub fn load_batch(
        &mut self,
        adapter: &mut dyn Adapter,
        entries: &[(&str, &str)],
        policy: LoadPolicy,
    ) -> Result<usize, LoadError> {
        let mut loaded = 0;
        let mut first_err = None;
        for (name, path) in entries {
            match self.load(adapter, name, path) {
                Ok(()) => loaded += 1,
                Err(e) => {
                    error!("{}", e);
                    if policy == LoadPolicy::AllOrNothing {
                        for (n, _) in entries {
                            if let Some(t) = self.get_mut(n) {
                                t.release(adapter);
                            }
                        }
                        return Err(e);
                    }
                    first_err.get_or_insert(e);
                }
            }
        }
        match first_err {
            Some(e) if loaded == 0 => Err(e),
            Some(_) => {
                warn!("batch partially loaded {}/{}", loaded, entries.len());
                Ok(loaded)
            }
            None => Ok(loaded),
        }
    }

    pub fn get(&self, name: &str) -> Option<&GpuTexture> {
        self.textures_index.get(name).map(|idx| &self.textures[*idx])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut GpuTexture> {
        match self.textures_index.get(name) {
            Some(idx) => Some(&mut self.textures[*idx]),
            None => None,
        }
    }

    pub fn at(&self, idx: usize) -> Option<&GpuTexture> {
        self.textures.get(idx)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    pub fn loaded(&self) -> usize {
        self.textures.iter().filter(|t| t.is_loaded()).count()
    }

    /// Releases every texture, slots stay but become inert
    pub fn release_all(&mut self, adapter: &mut dyn Adapter) {
        let n = self.loaded();
        for t in self.textures.iter_mut() {
            t.release(adapter);
        }
        if n > 0 {
            info!("released {} textures", n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::adapter::soft::SoftAdapter;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    fn fixture(dir: &TempDir, name: &str) -> String {
        let path = dir.path().join(name);
        RgbaImage::from_pixel(3, 3, Rgba([9, 9, 9, 255]))
            .save(&path)
            .unwrap();
        path.to_string_lossy().into_owned()
    }

    fn adapter() -> SoftAdapter {
        let mut ad = SoftAdapter::new();
        ad.init("asset", 8, 8, false).unwrap();
        ad
    }

    #[test]
    fn all_or_nothing_releases_batch_on_failure() {
        let dir = TempDir::new().unwrap();
        let a = fixture(&dir, "a.png");
        let b = fixture(&dir, "b.png");
        let mut ad = adapter();
        let mut store = TextureStore::new();
        let err = store
            .load_batch(
                &mut ad,
                &[("a", a.as_str()), ("b", b.as_str()), ("c", "missing.bmp")],
                LoadPolicy::AllOrNothing,
            )
            .unwrap_err();
        assert_eq!(err.path(), "missing.bmp");
        assert_eq!(store.loaded(), 0);
        assert_eq!(ad.live_textures(), 0);
    }

    #[test]
    fn any_succeeds_keeps_partial_batch() {
        let dir = TempDir::new().unwrap();
        let a = fixture(&dir, "a.png");
        let mut ad = adapter();
        let mut store = TextureStore::new();
        let n = store
            .load_batch(&mut ad, &[("x", "missing.bmp"), ("a", a.as_str())], LoadPolicy::AnySucceeds)
            .unwrap();
        assert_eq!(n, 1);
        assert!(store.get("a").unwrap().is_loaded());
        assert!(!store.get("x").unwrap().is_loaded());

        let err = store
            .load_batch(&mut ad, &[("y", "nope.png")], LoadPolicy::AnySucceeds)
            .unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
        store.release_all(&mut ad);
    }

    #[test]
    fn names_map_to_load_order() {
        let dir = TempDir::new().unwrap();
        let a = fixture(&dir, "a.png");
        let mut ad = adapter();
        let mut store = TextureStore::new();
        store.load(&mut ad, "first", &a).unwrap();
        store.load(&mut ad, "second", &a).unwrap();
        // reload into an existing slot keeps its index
        store.load(&mut ad, "first", &a).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(ad.live_textures(), 2);
        assert_eq!(store.at(0).unwrap().id(), store.get("first").unwrap().id());
        store.release_all(&mut ad);
        assert_eq!(ad.live_textures(), 0);
        assert_eq!(store.loaded(), 0);
    }
}
