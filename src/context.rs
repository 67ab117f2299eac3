// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! Context encapsulates the public state of a running lesson:
//! config, stage (frames run so far), the quit flag, input events of the
//! current frame, the texture store, and the render adapter.
//! It is passed explicitly to every Model and Render call.

use crate::{
    asset::TextureStore, config::LessonConfig, error::LoadError, event::Event,
    render::adapter::Adapter,
};
use log::info;

pub struct Context {
    pub config: LessonConfig,
    pub stage: u64,
    pub quit: bool,
    pub input_events: Vec<Event>,
    pub textures: TextureStore,
    pub adapter: Box<dyn Adapter>,
}

impl Context {
    pub fn new(config: LessonConfig, adapter: Box<dyn Adapter>) -> Self {
        Self {
            config,
            stage: 0,
            quit: false,
            input_events: vec![],
            textures: TextureStore::new(),
            adapter,
        }
    }

    /// Loads an asset location into the texture named name
    pub fn load_texture(&mut self, name: &str, loc: &str) -> Result<(), LoadError> {
        let path = self.config.asset(loc);
        self.textures.load(self.adapter.as_mut(), name, &path)
    }

    /// Loads (name, location) pairs under the configured LoadPolicy
    pub fn load_batch(&mut self, entries: &[(&str, &str)]) -> Result<usize, LoadError> {
        let paths: Vec<String> = entries.iter().map(|(_, loc)| self.config.asset(loc)).collect();
        let resolved: Vec<(&str, &str)> = entries
            .iter()
            .zip(paths.iter())
            .map(|((name, _), path)| (*name, path.as_str()))
            .collect();
        self.textures
            .load_batch(self.adapter.as_mut(), &resolved, self.config.load_policy)
    }

    /// Releases every texture, then tears the adapter down.
    /// Safe to call more than once.
    pub fn close(&mut self) {
        self.textures.release_all(self.adapter.as_mut());
        self.adapter.reset();
        info!("close ok, {} textures left alive", self.adapter.live_textures());
    }
}
