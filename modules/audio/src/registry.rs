use std::collections::HashMap;

use crate::clip::Clip;
use crate::errors::{Error, Result};

/// Owns every loaded clip, keyed by name. Clips are never evicted.
#[derive(Debug, Default)]
pub struct ClipRegistry {
    clips: HashMap<String, Clip>,
}

impl ClipRegistry {
    pub fn new() -> Self {
        ClipRegistry::default()
    }

    /// Registers `clip` under `name`. Registered clips are never overwritten.
    pub fn insert<T: Into<String>>(&mut self, name: T, clip: Clip) -> Result<()> {
        let name = name.into();
        if self.clips.contains_key(&name) {
            return Err(Error::Duplicated(name));
        }

        self.clips.insert(name, clip);
        Ok(())
    }

    pub fn get<T: AsRef<str>>(&self, name: T) -> Result<&Clip> {
        let name = name.as_ref();
        self.clips
            .get(name)
            .ok_or_else(|| Error::TrackNotFound(name.to_owned()))
    }

    pub fn get_mut<T: AsRef<str>>(&mut self, name: T) -> Result<&mut Clip> {
        let name = name.as_ref();
        self.clips
            .get_mut(name)
            .ok_or_else(|| Error::TrackNotFound(name.to_owned()))
    }

    #[inline]
    pub fn contains<T: AsRef<str>>(&self, name: T) -> bool {
        self.clips.contains_key(name.as_ref())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.clips.keys().map(|v| v.as_str())
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Clip)> {
        self.clips.iter_mut().map(|(k, v)| (k.as_str(), v))
    }
}
