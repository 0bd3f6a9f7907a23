use std::io::Cursor;
use std::sync::Arc;

use cadence::sched::prelude::LockLatch;
use lewton::inside_ogg::OggStreamReader;

use super::buffer::AudioBuffer;

/// The outcome of decoding the bytes of a clip.
pub type Decoded = Result<AudioBuffer, failure::Error>;

/// Decodes compressed audio into PCM samples.
///
/// Like fetchers, implementations decide when and where the work happens. The latch must be
/// set eventually, with either the decoded buffer or the reason of the failure.
pub trait Decode: Send + Sync + 'static {
    fn decode(&self, bytes: Box<[u8]>, state: Arc<LockLatch<Decoded>>);
}

/// Decodes Ogg/Vorbis streams on worker threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct OggDecoder {}

impl OggDecoder {
    pub fn new() -> Self {
        OggDecoder {}
    }

    /// Decodes `bytes` on the current thread.
    pub fn decode_ogg(bytes: &[u8]) -> Decoded {
        let mut stream_reader = OggStreamReader::new(Cursor::new(bytes))?;

        let mut buffer = AudioBuffer {
            channels: stream_reader.ident_hdr.audio_channels,
            sample_rate: stream_reader.ident_hdr.audio_sample_rate,
            pcm: Vec::new(),
        };

        if buffer.channels == 0 || buffer.sample_rate == 0 {
            bail!(
                "Malformed vorbis header (channels {} sample_rate {}).",
                buffer.channels,
                buffer.sample_rate
            );
        }

        while let Some(v) = stream_reader.read_dec_packet_itl()? {
            buffer.pcm.extend(&v);
        }

        if buffer.pcm.is_empty() {
            bail!("Vorbis stream does not contain any samples.");
        }

        Ok(buffer)
    }
}

impl Decode for OggDecoder {
    fn decode(&self, bytes: Box<[u8]>, state: Arc<LockLatch<Decoded>>) {
        let tx = state.clone();
        if let Err(err) = cadence::sched::spawn(move || tx.set(OggDecoder::decode_ogg(&bytes))) {
            state.set(Err(err));
        }
    }
}
