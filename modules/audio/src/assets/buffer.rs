/// Decoded PCM samples of a clip. Samples of all channels are interleaved.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    pub pcm: Vec<i16>,
    pub channels: u8,
    pub sample_rate: u32,
}

impl AudioBuffer {
    /// Number of sample frames, a frame holds one sample for every channel.
    #[inline]
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.pcm.len() / self.channels as usize
        }
    }

    /// Length of this buffer in seconds.
    #[inline]
    pub fn duration(&self) -> f64 {
        if self.sample_rate == 0 {
            0.0
        } else {
            self.frames() as f64 / f64::from(self.sample_rate)
        }
    }
}
