//! Signaling primitives and a tiny worker spawner.
//!
//! Every asynchronous step in this workspace (fetching bytes, decoding them) runs somewhere
//! else and reports back through a latch. The owner of the latch polls it from its own control
//! flow, so no callbacks ever run on a foreign thread.

pub mod latch;

pub mod prelude {
    pub use super::latch::{Latch, LockLatch, SpinLatch};
}

use std::thread::Builder;

/// Runs `func` on a detached worker thread.
pub fn spawn<F>(func: F) -> crate::errors::Result<()>
where
    F: FnOnce() + Send + 'static,
{
    Builder::new()
        .name("Worker".into())
        .spawn(func)
        .map_err(|err| format_err!("Failed to spawn worker thread: {}.", err))?;

    Ok(())
}
