use std::sync::Arc;

use crate::assets::prelude::AudioBuffer;

use super::voice::{VoiceId, VoiceParams, VoiceProbe};
use super::Command;

/// Mixes the live voices into interleaved output frames.
pub struct Sampler {
    channels: u8,
    sample_rate: u32,
    voices: Vec<VoiceSampler>,
}

impl Sampler {
    pub fn new(channels: u8, sample_rate: u32) -> Self {
        Sampler {
            channels: channels.max(1),
            sample_rate: sample_rate.max(1),
            voices: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn update<T: Iterator<Item = Command>>(&mut self, bufs: T) -> bool {
        for cmd in bufs {
            match cmd {
                Command::CreateVoice(params) => self.create_voice(params),
                Command::DeleteVoice(id) => self.delete_voice(id),
                Command::SetGain(id, gain) => self.set_gain(id, gain),
                Command::Discard => {
                    self.voices.clear();
                    return false;
                }
            }
        }

        true
    }

    /// Fills `out` with the mix of all voices, and publishes their cursors afterwards. Voices
    /// that reached their natural end are released.
    pub fn render(&mut self, out: &mut [f32]) {
        for v in out.iter_mut() {
            *v = 0.0;
        }

        let channels = self.channels as usize;
        let sample_rate = self.sample_rate;

        for frame in out.chunks_mut(channels) {
            for voice in &mut self.voices {
                if voice.ended {
                    continue;
                }

                for (channel, v) in frame.iter_mut().enumerate() {
                    *v += voice.sample(channel);
                }

                voice.advance(sample_rate);
            }
        }

        for voice in &self.voices {
            voice.publish();
        }

        self.voices.retain(|v| !v.ended);
    }

    fn create_voice(&mut self, params: VoiceParams) {
        self.delete_voice(params.id);

        let mut voice = VoiceSampler::new(params);
        voice.settle();
        voice.publish();

        if !voice.ended {
            self.voices.push(voice);
        }
    }

    #[inline]
    fn delete_voice(&mut self, id: VoiceId) {
        self.voices.retain(|v| v.id != id);
    }

    #[inline]
    fn set_gain(&mut self, id: VoiceId, gain: f32) {
        if let Some(v) = self.voices.iter_mut().find(|v| v.id == id) {
            v.gain = gain;
        }
    }
}

struct VoiceSampler {
    id: VoiceId,
    buffer: Arc<AudioBuffer>,
    probe: Arc<VoiceProbe>,
    gain: f32,
    loops: bool,
    // Position in frames of the buffer.
    iter: f64,
    ended: bool,
}

impl VoiceSampler {
    fn new(params: VoiceParams) -> Self {
        let iter = params.offset * f64::from(params.buffer.sample_rate);

        VoiceSampler {
            id: params.id,
            buffer: params.buffer,
            probe: params.probe,
            gain: params.gain,
            loops: params.loops,
            iter,
            ended: false,
        }
    }

    fn sample(&self, channel: usize) -> f32 {
        let channels = self.buffer.channels as usize;
        if channels == 0 {
            return 0.0;
        }

        let idx = (self.iter as usize) * channels + channel % channels;
        match self.buffer.pcm.get(idx) {
            Some(&v) => sample_i16_to_f32(v) * self.gain,
            None => 0.0,
        }
    }

    fn advance(&mut self, sample_rate: u32) {
        self.iter += f64::from(self.buffer.sample_rate) / f64::from(sample_rate);
        self.settle();
    }

    /// Wraps or ends the voice once its cursor passed the end of the buffer.
    fn settle(&mut self) {
        let frames = self.buffer.frames() as f64;
        if self.iter < frames {
            return;
        }

        if self.loops && frames > 0.0 {
            self.iter %= frames;
        } else {
            self.iter = frames;
            self.ended = true;
        }
    }

    fn publish(&self) {
        if self.buffer.sample_rate > 0 {
            self.probe
                .set_cursor(self.iter / f64::from(self.buffer.sample_rate));
        }

        if self.ended {
            self.probe.end();
        }
    }
}

#[inline]
pub fn sample_i16_to_f32(sample: i16) -> f32 {
    if sample < 0 {
        f32::from(sample) / -f32::from(std::i16::MIN)
    } else {
        f32::from(sample) / f32::from(std::i16::MAX)
    }
}

#[allow(dead_code)]
#[inline]
pub fn sample_f32_to_i16(sample: f32) -> i16 {
    if sample >= 0.0 {
        (sample.min(1.0) * f32::from(std::i16::MAX)) as i16
    } else {
        (-sample.max(-1.0) * f32::from(std::i16::MIN)) as i16
    }
}

#[allow(dead_code)]
#[inline]
pub fn sample_f32_to_u16(sample: f32) -> u16 {
    (((sample.max(-1.0).min(1.0) + 1.0) * 0.5) * f32::from(std::u16::MAX)).round() as u16
}
