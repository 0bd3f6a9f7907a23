use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::sched::prelude::LockLatch;

use super::super::locator::Locator;
use super::super::request::Response;
use super::Fetch;

/// A table of in-process blobs, addressed by the path of a locator. Requests are answered
/// immediately.
#[derive(Debug, Default, Clone)]
pub struct Memory {
    blobs: Arc<RwLock<HashMap<String, Arc<[u8]>>>>,
}

impl Memory {
    pub fn new() -> Self {
        Memory::default()
    }

    /// Adds or replaces the blob at `path`. Clones of this fetcher share the same table.
    pub fn insert<T1, T2>(&self, path: T1, bytes: T2)
    where
        T1: Into<String>,
        T2: Into<Vec<u8>>,
    {
        let bytes: Arc<[u8]> = bytes.into().into();
        self.blobs.write().unwrap().insert(path.into(), bytes);
    }

    pub fn remove<T: AsRef<str>>(&self, path: T) -> bool {
        self.blobs.write().unwrap().remove(path.as_ref()).is_some()
    }
}

impl Fetch for Memory {
    fn request(&self, locator: &Locator, state: Arc<LockLatch<Response>>) {
        let rsp = self
            .blobs
            .read()
            .unwrap()
            .get(locator.path())
            .map(|bytes| Box::<[u8]>::from(&bytes[..]))
            .ok_or_else(|| format_err!("Blob {} does not exist.", locator));

        state.set(rsp);
    }
}
