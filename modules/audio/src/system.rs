use std::sync::Arc;

use cadence::res::prelude::ResourceSystem;

use crate::assets::prelude::Decode;
use crate::clip::{Clip, ClipStatus};
use crate::config::BatchConfig;
use crate::errors::{Error, Result};
use crate::loader::{AssetLoader, BatchId, BatchReport};
use crate::mixer::AudioContext;
use crate::playback::PlaybackController;
use crate::registry::ClipRegistry;

/// The centralized management of named audio clips.
///
/// Loading progresses and naturally ended clips are noticed only in `advance`, which should be
/// called regularly (e.g. once per frame) by the owner.
pub struct AudioSystem {
    clips: ClipRegistry,
    loader: AssetLoader,
    controller: PlaybackController,
}

impl AudioSystem {
    pub fn new<D: Decode>(context: Arc<AudioContext>, resources: ResourceSystem, decoder: D) -> Self {
        AudioSystem {
            clips: ClipRegistry::new(),
            loader: AssetLoader::new(resources, decoder),
            controller: PlaybackController::new(context),
        }
    }

    #[inline]
    pub fn context(&self) -> &Arc<AudioContext> {
        self.controller.context()
    }

    #[inline]
    pub fn resources_mut(&mut self) -> &mut ResourceSystem {
        self.loader.resources_mut()
    }

    #[inline]
    pub fn clips(&self) -> &ClipRegistry {
        &self.clips
    }

    /// Loads a batch of clips asynchronously.
    #[inline]
    pub fn load(&mut self, config: &BatchConfig) -> Result<BatchId> {
        self.loader.load(&self.clips, config)
    }

    /// Loads a batch of clips asynchronously. `func` is called once, from `advance`, after
    /// every clip in the batch has been loaded or failed.
    #[inline]
    pub fn load_with_callback<F>(&mut self, config: &BatchConfig, func: F) -> Result<BatchId>
    where
        F: FnOnce(BatchReport) + 'static,
    {
        self.loader.load_with_callback(&self.clips, config, func)
    }

    /// Loads a batch of clips described in JSON asynchronously.
    pub fn load_json<T: AsRef<str>>(&mut self, json: T) -> Result<BatchId> {
        let config = BatchConfig::from_json(json)?;
        self.load(&config)
    }

    /// Registers the clips that finished loading, fires the callbacks of finished batches and
    /// stops clips that played to their end. Returns the reports of finished batches which were
    /// loaded without a callback.
    pub fn advance(&mut self) -> Vec<BatchReport> {
        let reports = self.loader.advance(&mut self.clips);
        self.controller.advance(&mut self.clips);
        reports
    }

    #[inline]
    pub fn is_loading<T: AsRef<str>>(&self, name: T) -> bool {
        self.loader.is_loading(name)
    }

    /// Returns true if the batch `id` has not been reported yet.
    #[inline]
    pub fn is_pending(&self, id: BatchId) -> bool {
        self.loader.is_pending(id)
    }

    pub fn status<T: AsRef<str>>(&self, name: T) -> Result<ClipStatus> {
        let name = name.as_ref();
        if self.loader.is_loading(name) {
            return Ok(ClipStatus::Loading);
        }

        self.clips.get(name).map(|v| v.status())
    }

    #[inline]
    pub fn clip<T: AsRef<str>>(&self, name: T) -> Result<&Clip> {
        self.clips.get(name)
    }

    #[inline]
    pub fn position<T: AsRef<str>>(&self, name: T) -> Result<f64> {
        self.clips.get(name).map(|v| v.position())
    }

    /// Plays a clip. `loops` overrides the loop default of the clip, e.g. `play("theme", None)`
    /// or `play("theme", true)`.
    pub fn play<T, L>(&mut self, name: T, loops: L) -> Result<()>
    where
        T: AsRef<str>,
        L: Into<Option<bool>>,
    {
        let name = self.ready(name.as_ref())?;
        self.controller.play(&mut self.clips, name, loops.into())
    }

    /// Pauses a clip. When you next call play this clip will resume from the same point.
    pub fn pause<T: AsRef<str>>(&mut self, name: T) -> Result<()> {
        let name = self.ready(name.as_ref())?;
        self.controller.pause(&mut self.clips, name)
    }

    /// Stops a clip. When you next call play this clip will begin at its beginning.
    pub fn stop<T: AsRef<str>>(&mut self, name: T) -> Result<()> {
        let name = self.ready(name.as_ref())?;
        self.controller.stop(&mut self.clips, name)
    }

    /// Sets the volume of a clip.
    pub fn volume<T: AsRef<str>>(&mut self, name: T, level: f32) -> Result<()> {
        let name = self.ready(name.as_ref())?;
        self.controller.volume(&mut self.clips, name, level)
    }

    fn ready<'a>(&self, name: &'a str) -> Result<&'a str> {
        if self.loader.is_loading(name) {
            Err(Error::NotReady(name.to_owned()))
        } else {
            Ok(name)
        }
    }
}
