#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use cadence::res::prelude::*;
use cadence::sched::prelude::LockLatch;
use cadence_audio::prelude::*;

/// Output rate of the offline contexts used in tests. Test buffers share it, so a voice moves
/// one buffer frame per rendered frame.
pub const RATE: u32 = 100;

/// Decodes every byte into one mono sample. Streams starting with `bad` are corrupted.
#[derive(Debug, Default, Clone, Copy)]
pub struct PcmDecoder;

impl PcmDecoder {
    pub fn decode_pcm(bytes: &[u8]) -> Decoded {
        if bytes.starts_with(b"bad") {
            return Err(failure::err_msg("corrupted stream"));
        }

        Ok(AudioBuffer {
            pcm: bytes.iter().map(|&v| i16::from(v) * 100).collect(),
            channels: 1,
            sample_rate: RATE,
        })
    }
}

impl Decode for PcmDecoder {
    fn decode(&self, bytes: Box<[u8]>, state: Arc<LockLatch<Decoded>>) {
        state.set(PcmDecoder::decode_pcm(&bytes));
    }
}

/// A fetcher which holds every request until the test resolves it.
#[derive(Clone, Default)]
pub struct Gate {
    requests: Arc<Mutex<Vec<(String, Arc<LockLatch<Response>>)>>>,
}

impl Gate {
    pub fn new() -> Self {
        Gate::default()
    }

    pub fn len(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|v| v.0.clone())
            .collect()
    }

    pub fn open(&self, path: &str, bytes: &[u8]) {
        self.latch(path).set(Ok(bytes.to_vec().into_boxed_slice()));
    }

    pub fn fail(&self, path: &str) {
        self.latch(path).set(Err(failure::err_msg("connection reset")));
    }

    fn latch(&self, path: &str) -> Arc<LockLatch<Response>> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.0 == path)
            .map(|v| v.1.clone())
            .expect("no such request")
    }
}

impl Fetch for Gate {
    fn request(&self, locator: &Locator, state: Arc<LockLatch<Response>>) {
        self.requests
            .lock()
            .unwrap()
            .push((locator.path().to_owned(), state));
    }
}

/// Samples of a clip lasting `secs` seconds.
pub fn samples(secs: f64) -> Vec<u8> {
    vec![64u8; (secs * f64::from(RATE)) as usize]
}

pub fn offline() -> Arc<AudioContext> {
    Arc::new(AudioContext::offline(AudioParams {
        sample_rate: RATE,
        channels: 1,
    }))
}

/// An audio system reading plain locators with `fetcher`.
pub fn playground<F: Fetch>(fetcher: F) -> (Arc<AudioContext>, AudioSystem) {
    playground_with(fetcher, PcmDecoder)
}

pub fn playground_with<F, D>(fetcher: F, decoder: D) -> (Arc<AudioContext>, AudioSystem)
where
    F: Fetch,
    D: Decode,
{
    let _ = env_logger::try_init();

    let mut schemas = SchemaResolver::new();
    schemas.add("file", fetcher).unwrap();

    let resources = ResourceSystem::new(ResourceParams {
        shortcuts: ShortcutResolver::new(),
        schemas,
    });

    let context = offline();
    let audio = AudioSystem::new(context.clone(), resources, decoder);
    (context, audio)
}

/// Advances time of an offline context by `secs` seconds.
pub fn render(context: &AudioContext, secs: f64) {
    context.render((secs * f64::from(RATE)).round() as usize);
}

pub fn approx(lhs: f64, rhs: f64) -> bool {
    (lhs - rhs).abs() < 1e-6
}
