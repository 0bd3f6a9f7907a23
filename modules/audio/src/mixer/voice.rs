//! Voices are the single-use playback handles of the mixer.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use cadence::sched::prelude::{Latch, SpinLatch};

use crate::assets::prelude::AudioBuffer;
use crate::errors::{Error, Result};

use super::{Command, Shared};

pub type VoiceId = u32;

/// The state of a voice published by the mixer.
#[derive(Debug, Default)]
pub struct VoiceProbe {
    cursor: AtomicU64,
    ended: SpinLatch,
}

impl VoiceProbe {
    #[inline]
    pub fn cursor(&self) -> f64 {
        f64::from_bits(self.cursor.load(Ordering::SeqCst))
    }

    #[inline]
    pub fn set_cursor(&self, secs: f64) {
        self.cursor.store(secs.to_bits(), Ordering::SeqCst);
    }

    #[inline]
    pub fn is_ended(&self) -> bool {
        self.ended.is_set()
    }

    #[inline]
    pub fn end(&self) {
        self.ended.set();
    }
}

/// Everything the mixer needs to play a voice.
#[derive(Debug, Clone)]
pub struct VoiceParams {
    pub id: VoiceId,
    pub buffer: Arc<AudioBuffer>,
    pub gain: f32,
    pub loops: bool,
    pub offset: f64,
    pub probe: Arc<VoiceProbe>,
}

/// A transient playback handle of a buffer.
///
/// A voice could be started only once. After being stopped it is gone for good, so another
/// play cycle always builds a new voice. Dropping a started voice releases its slot in the
/// mixer.
pub struct Voice {
    id: VoiceId,
    buffer: Arc<AudioBuffer>,
    shared: Arc<Shared>,
    probe: Arc<VoiceProbe>,
    gain: f32,
    loops: bool,
    started: bool,
}

impl Voice {
    pub(crate) fn new(id: VoiceId, buffer: Arc<AudioBuffer>, shared: Arc<Shared>) -> Self {
        Voice {
            id,
            buffer,
            shared,
            probe: Arc::new(VoiceProbe::default()),
            gain: 1.0,
            loops: false,
            started: false,
        }
    }

    #[inline]
    pub fn id(&self) -> VoiceId {
        self.id
    }

    #[inline]
    pub fn gain(&self) -> f32 {
        self.gain
    }

    #[inline]
    pub fn loops(&self) -> bool {
        self.loops
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Sets whether the buffer wraps around at its end. Takes effect when the voice starts.
    #[inline]
    pub fn set_loop(&mut self, loops: bool) {
        self.loops = loops;
    }

    /// Sets the gain stage of this voice. A started voice applies it immediately.
    pub fn set_gain(&mut self, gain: f32) {
        self.gain = gain;
        if self.started {
            self.shared.push(Command::SetGain(self.id, gain));
        }
    }

    /// Connects this voice to the output and starts playing at `offset` seconds into the
    /// buffer.
    pub fn start(&mut self, offset: f64) -> Result<()> {
        if self.started {
            return Err(Error::VoiceConsumed(self.id));
        }

        if self.shared.is_discarded() {
            return Err(Error::Discarded);
        }

        let duration = self.buffer.duration();
        let mut offset = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
        if self.loops && duration > 0.0 {
            offset %= duration;
        } else {
            offset = offset.min(duration);
        }

        self.probe.set_cursor(offset);
        self.started = true;

        self.shared.push(Command::CreateVoice(VoiceParams {
            id: self.id,
            buffer: self.buffer.clone(),
            gain: self.gain,
            loops: self.loops,
            offset,
            probe: self.probe.clone(),
        }));

        Ok(())
    }

    /// The playback cursor in seconds into the buffer.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.probe.cursor()
    }

    /// Returns true once a non-looping voice has played to the end of its buffer.
    #[inline]
    pub fn is_ended(&self) -> bool {
        self.probe.is_ended()
    }

    /// Disconnects this voice for good, returning the playback cursor at the moment it stopped.
    pub fn stop(self) -> f64 {
        self.elapsed()
    }
}

impl fmt::Debug for Voice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Voice")
            .field("id", &self.id)
            .field("gain", &self.gain)
            .field("loops", &self.loops)
            .field("started", &self.started)
            .field("elapsed", &self.elapsed())
            .finish()
    }
}

impl Drop for Voice {
    fn drop(&mut self) {
        if self.started {
            self.shared.push(Command::DeleteVoice(self.id));
        }
    }
}
