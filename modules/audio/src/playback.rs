//! Transport controls of clips.
//!
//! A clip is played by a voice of the shared `AudioContext`. Voices are single-use: once one
//! is stopped it could never be started again. So every transition into `Playing` builds a
//! fresh voice, and hands over the durable state of the clip (position, volume) to it. The
//! voice of a clip is released before its replacement gets built.

use std::sync::Arc;

use crate::clip::{Clip, ClipStatus};
use crate::errors::{Error, Result};
use crate::mixer::AudioContext;
use crate::registry::ClipRegistry;

pub struct PlaybackController {
    context: Arc<AudioContext>,
}

impl PlaybackController {
    pub fn new(context: Arc<AudioContext>) -> Self {
        PlaybackController { context }
    }

    #[inline]
    pub fn context(&self) -> &Arc<AudioContext> {
        &self.context
    }

    /// Plays the clip `name`. `loops` overrides the loop default of the clip for this play
    /// cycle only.
    ///
    /// Playing a clip which is playing already does nothing. Clips loaded with the interrupt
    /// flag always restart from the beginning instead, even when paused.
    pub fn play(&self, clips: &mut ClipRegistry, name: &str, loops: Option<bool>) -> Result<()> {
        let clip = clips.get_mut(name)?;
        reap(name, clip);

        match clip.status {
            ClipStatus::Loading => return Err(Error::NotReady(name.to_owned())),
            ClipStatus::Playing if !clip.interrupt => {
                debug!("Track {} is playing already.", name);
                return Ok(());
            }
            _ if clip.interrupt => {
                debug!("Restarts track {}.", name);
                clip.voice = None;
                clip.position = 0.0;
                clip.status = ClipStatus::Stopped;
            }
            ClipStatus::Playing | ClipStatus::Stopped | ClipStatus::Paused => {}
        }

        let loops = loops.unwrap_or(clip.loops);

        let mut voice = self.context.build(clip.buffer.clone())?;
        voice.set_loop(loops);
        voice.set_gain(clip.volume);
        voice.start(clip.position)?;

        debug!(
            "Plays track {} at {:.3}s (loop: {}, volume: {}).",
            name, clip.position, loops, clip.volume
        );

        clip.voice = Some(voice);
        clip.status = ClipStatus::Playing;
        Ok(())
    }

    /// Pauses the clip `name`, next `play` resumes from the same point. Does nothing unless
    /// the clip is playing.
    pub fn pause(&self, clips: &mut ClipRegistry, name: &str) -> Result<()> {
        let clip = clips.get_mut(name)?;
        reap(name, clip);

        if clip.status != ClipStatus::Playing {
            return Ok(());
        }

        if let Some(voice) = clip.voice.take() {
            clip.position = voice.stop();
        }

        clip.status = ClipStatus::Paused;
        debug!("Pauses track {} at {:.3}s.", name, clip.position);
        Ok(())
    }

    /// Stops the clip `name`, next `play` begins at its beginning.
    pub fn stop(&self, clips: &mut ClipRegistry, name: &str) -> Result<()> {
        let clip = clips.get_mut(name)?;
        reap(name, clip);

        if let Some(voice) = clip.voice.take() {
            voice.stop();
        }

        clip.position = 0.0;
        clip.status = ClipStatus::Stopped;
        debug!("Stops track {}.", name);
        Ok(())
    }

    /// Sets the volume of the clip `name`. The level is kept for later play cycles, and applied
    /// to the live voice immediately if the clip is playing. Levels are not clamped.
    pub fn volume(&self, clips: &mut ClipRegistry, name: &str, level: f32) -> Result<()> {
        let clip = clips.get_mut(name)?;
        reap(name, clip);

        clip.volume = level;
        if let Some(ref mut voice) = clip.voice {
            voice.set_gain(level);
        }

        debug!("Set volume of track {}: {}", name, level);
        Ok(())
    }

    /// Moves clips whose voice played to its natural end back to `Stopped`. Returns the number
    /// of clips that ended.
    pub fn advance(&self, clips: &mut ClipRegistry) -> usize {
        let mut ended = 0;
        for (name, clip) in clips.iter_mut() {
            if reap(name, clip) {
                ended += 1;
            }
        }

        ended
    }
}

/// Releases the voice of `clip` if it has ended by itself.
fn reap(name: &str, clip: &mut Clip) -> bool {
    let ended = clip.is_ended();
    if ended {
        debug!("Track {} has reached its end.", name);
        clip.voice = None;
        clip.position = 0.0;
        clip.status = ClipStatus::Stopped;
    }

    ended
}
