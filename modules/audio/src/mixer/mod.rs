//! The shared audio output.
//!
//! An `AudioContext` owns the mixer that every clip plays through. Each play cycle of a clip
//! gets a fresh `Voice` from the context; the voice talks to the mixer through a command queue,
//! which is drained by whichever backend renders the output.

#[cfg(all(feature = "device", not(target_arch = "wasm32")))]
mod cpal;
mod headless;
mod sampler;

pub mod voice;

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use cadence::sched::prelude::{Latch, SpinLatch};
use serde::Deserialize;

use crate::assets::prelude::AudioBuffer;
use crate::errors::{Error, Result};

use self::sampler::Sampler;
use self::voice::{Voice, VoiceId, VoiceParams};

/// The setup parameters of the audio output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AudioParams {
    pub sample_rate: u32,
    pub channels: u8,
}

impl Default for AudioParams {
    fn default() -> Self {
        AudioParams {
            sample_rate: 44100,
            channels: 2,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Command {
    CreateVoice(VoiceParams),
    DeleteVoice(VoiceId),
    SetGain(VoiceId, f32),
    Discard,
}

pub(crate) struct Shared {
    tx: RwLock<Vec<Command>>,
    sampler: Mutex<Sampler>,
    discarded: SpinLatch,
}

impl Shared {
    fn new(params: AudioParams) -> Self {
        Shared {
            tx: RwLock::new(Vec::new()),
            sampler: Mutex::new(Sampler::new(params.channels, params.sample_rate)),
            discarded: SpinLatch::new(),
        }
    }

    #[inline]
    pub fn push(&self, cmd: Command) {
        if !self.discarded.is_set() {
            self.tx.write().unwrap().push(cmd);
        }
    }

    #[inline]
    pub fn is_discarded(&self) -> bool {
        self.discarded.is_set()
    }

    /// Applies the queued commands and mixes every live voice into `out`. Returns false once
    /// the output has been discarded.
    pub fn render(&self, out: &mut [f32]) -> bool {
        let mut bufs = Vec::new();
        std::mem::swap(&mut bufs, &mut *self.tx.write().unwrap());

        let mut sampler = self.sampler.lock().unwrap();
        let alive = sampler.update(bufs.drain(..));
        sampler.render(out);
        alive && !self.discarded.is_set()
    }
}

/// The process-wide audio output. It is created once, passed explicitly to the components that
/// build voices, and torn down explicitly (or when dropped).
pub struct AudioContext {
    params: AudioParams,
    shared: Arc<Shared>,
    voices: AtomicU32,
}

impl AudioContext {
    /// Creates an output which is never rendered by a background thread. Time only advances
    /// when `render` is called, which makes playback deterministic.
    pub fn offline(params: AudioParams) -> Self {
        info!("Create offline audio mixer. {:?}", params);
        AudioContext::with(params)
    }

    /// Creates an output which renders into a scratch buffer at real-time pace, without any
    /// audio device attached.
    pub fn headless(params: AudioParams) -> Result<Self> {
        let ctx = AudioContext::with(params);
        headless::run(ctx.shared.clone(), params)?;
        Ok(ctx)
    }

    /// Creates an output on the default audio device. The format of the device overrides the
    /// provided parameters.
    #[cfg(all(feature = "device", not(target_arch = "wasm32")))]
    pub fn device() -> Result<Self> {
        let device = self::cpal::Device::open()?;
        let ctx = AudioContext::with(device.params());
        device.run(ctx.shared.clone())?;
        Ok(ctx)
    }

    fn with(params: AudioParams) -> Self {
        let params = AudioParams {
            sample_rate: params.sample_rate.max(1),
            channels: params.channels.max(1),
        };

        AudioContext {
            params,
            shared: Arc::new(Shared::new(params)),
            voices: AtomicU32::new(0),
        }
    }

    #[inline]
    pub fn params(&self) -> AudioParams {
        self.params
    }

    /// Builds a new voice which plays `buffer` through this output. The voice is silent until
    /// it gets started.
    pub fn build(&self, buffer: Arc<AudioBuffer>) -> Result<Voice> {
        if self.shared.is_discarded() {
            return Err(Error::Discarded);
        }

        let id = self.voices.fetch_add(1, Ordering::Relaxed) + 1;
        Ok(Voice::new(id, buffer, self.shared.clone()))
    }

    /// Renders `frames` frames of interleaved output. This is the clock of offline contexts,
    /// contexts with a backend are rendered by their backend already.
    pub fn render(&self, frames: usize) -> Vec<f32> {
        let mut out = vec![0.0; frames * self.params.channels as usize];
        self.shared.render(&mut out);
        out
    }

    /// Returns the number of voices alive in the mixer, after applying queued commands.
    pub fn active_voices(&self) -> usize {
        self.shared.render(&mut []);
        self.shared.sampler.lock().unwrap().len()
    }

    #[inline]
    pub fn is_discarded(&self) -> bool {
        self.shared.is_discarded()
    }

    /// Stops the output. Every voice built afterwards fails with `Error::Discarded`.
    pub fn teardown(&self) {
        if self.shared.is_discarded() {
            return;
        }

        self.shared.push(Command::Discard);
        self.shared.discarded.set();
        self.shared.render(&mut []);
        info!("Audio mixer has been discarded.");
    }
}

impl Drop for AudioContext {
    fn drop(&mut self) {
        self.teardown();
    }
}
