use std::sync::Arc;

use crate::assets::prelude::AudioBuffer;
use crate::mixer::voice::Voice;

/// The transport state of a clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipStatus {
    Loading,
    Stopped,
    Playing,
    Paused,
}

/// A named, decoded audio clip with durable playback state.
///
/// The voice that actually plays a clip is transient: every play cycle builds a new one, while
/// the position and volume of the clip survive across them.
#[derive(Debug)]
pub struct Clip {
    pub(crate) buffer: Arc<AudioBuffer>,
    pub(crate) position: f64,
    pub(crate) volume: f32,
    pub(crate) status: ClipStatus,
    pub(crate) loops: bool,
    pub(crate) interrupt: bool,
    pub(crate) voice: Option<Voice>,
}

impl Clip {
    pub fn new(buffer: AudioBuffer, loops: bool, interrupt: bool) -> Self {
        Clip {
            buffer: Arc::new(buffer),
            position: 0.0,
            volume: 1.0,
            status: ClipStatus::Stopped,
            loops,
            interrupt,
            voice: None,
        }
    }

    #[inline]
    pub fn buffer(&self) -> &Arc<AudioBuffer> {
        &self.buffer
    }

    /// The transport state. A clip whose voice played to its end reads as `Stopped`, even
    /// before the voice gets released.
    pub fn status(&self) -> ClipStatus {
        if self.is_ended() {
            ClipStatus::Stopped
        } else {
            self.status
        }
    }

    /// The playback position in seconds. While playing it is read from the live voice.
    pub fn position(&self) -> f64 {
        match self.voice {
            Some(ref voice) if voice.is_ended() => 0.0,
            Some(ref voice) if self.status == ClipStatus::Playing => voice.elapsed(),
            _ => self.position,
        }
    }

    #[inline]
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Whether `play` loops this clip when no override is given.
    #[inline]
    pub fn loops(&self) -> bool {
        self.loops
    }

    #[inline]
    pub fn interrupt(&self) -> bool {
        self.interrupt
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.status() == ClipStatus::Playing
    }

    #[inline]
    pub(crate) fn is_ended(&self) -> bool {
        self.voice.as_ref().map(|v| v.is_ended()).unwrap_or(false)
    }

    /// Returns the live voice, if any.
    #[inline]
    pub fn voice(&self) -> Option<&Voice> {
        self.voice.as_ref()
    }
}
