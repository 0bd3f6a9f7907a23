//! Named audio clips with batch loading and transport controls.
//!
//! Clips are loaded in batches: the encoded bytes of every clip are fetched and decoded
//! asynchronously, and a single report is delivered once the whole batch resolved. Loaded
//! clips are then controlled by name with `play`, `pause`, `stop` and `volume`.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use cadence::res::prelude::*;
//! use cadence_audio::prelude::*;
//!
//! let context = Arc::new(AudioContext::headless(AudioParams::default()).unwrap());
//! let mut audio = AudioSystem::new(
//!     context.clone(),
//!     ResourceSystem::new(ResourceParams::default()),
//!     OggDecoder::new(),
//! );
//!
//! let config = BatchConfig::from_json(r#"{ "theme": { "file": "theme.ogg", "loop": true } }"#)
//!     .unwrap();
//!
//! audio
//!     .load_with_callback(&config, |report| println!("{:?}", report))
//!     .unwrap();
//!
//! while audio.is_loading("theme") {
//!     audio.advance();
//! }
//!
//! audio.play("theme", None).unwrap();
//! context.teardown();
//! ```

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

pub mod assets;
pub mod clip;
pub mod config;
pub mod errors;
pub mod loader;
pub mod mixer;
pub mod playback;
pub mod registry;

mod system;
pub use self::system::AudioSystem;

pub mod prelude {
    pub use crate::assets::prelude::{AudioBuffer, Decode, Decoded, OggDecoder};
    pub use crate::clip::{Clip, ClipStatus};
    pub use crate::config::{BatchConfig, ClipDescriptor, ClipParams};
    pub use crate::errors::{Error as AudioError, LoadFailure};
    pub use crate::loader::{AssetLoader, BatchId, BatchReport};
    pub use crate::mixer::voice::Voice;
    pub use crate::mixer::{AudioContext, AudioParams};
    pub use crate::playback::PlaybackController;
    pub use crate::registry::ClipRegistry;
    pub use crate::AudioSystem;
}
