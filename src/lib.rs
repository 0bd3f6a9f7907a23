//! # What is This?
//!
//! `cadence` is the foundation of a small audio clip manager. It provides the asynchronous
//! resource plumbing shared by its modules:
//!
//! 1. Latches, which are the signaling primitive between worker threads and the single
//! control flow that owns the clips.
//! 2. Resource locators and shortcut aliases, like `res:music/theme.ogg`.
//! 3. Pluggable byte fetchers keyed by the schema of a locator.
//!
//! The decoding of audio data and the playback of clips are implemented in the `cadence-audio`
//! module.

#[macro_use]
pub extern crate failure;
#[macro_use]
extern crate log;

pub mod errors;
pub mod res;
pub mod sched;

pub mod prelude {
    pub use crate::errors::Result as CaResult;
    pub use crate::res::prelude::*;
    pub use crate::sched::prelude::*;
}
