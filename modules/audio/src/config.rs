//! The batch configuration supplied by callers of `load`.
//!
//! ```json
//! {
//!     "music": { "file": "res:music.ogg", "loop": true },
//!     "click": { "file": "res:click.ogg", "interrupt": true }
//! }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::errors::{Error, Result};

/// The parameters of one clip in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClipParams {
    /// The locator of the encoded audio.
    pub file: String,
    /// Whether `play` loops the clip unless told otherwise.
    #[serde(rename = "loop", default)]
    pub loops: bool,
    /// Whether `play` restarts the clip from the beginning while it is playing.
    #[serde(default)]
    pub interrupt: bool,
}

impl ClipParams {
    pub fn new<T: Into<String>>(file: T) -> Self {
        ClipParams {
            file: file.into(),
            loops: false,
            interrupt: false,
        }
    }

    pub fn looped(mut self, loops: bool) -> Self {
        self.loops = loops;
        self
    }

    pub fn interrupt(mut self, interrupt: bool) -> Self {
        self.interrupt = interrupt;
        self
    }
}

/// The validated description of one clip to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipDescriptor {
    pub name: String,
    pub source: String,
    pub loops: bool,
    pub interrupt: bool,
}

/// A set of clips to load together, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct BatchConfig {
    clips: BTreeMap<String, ClipParams>,
}

impl BatchConfig {
    pub fn new() -> Self {
        BatchConfig::default()
    }

    /// Parses a batch from its JSON representation.
    pub fn from_json<T: AsRef<str>>(json: T) -> Result<Self> {
        serde_json::from_str(json.as_ref()).map_err(|err| Error::InvalidConfig(err.to_string()))
    }

    /// Converts an already parsed JSON document into a batch.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::InvalidConfig(format!(
                "expected a mapping from names to clips, found {}",
                value
            )));
        }

        serde_json::from_value(value).map_err(|err| Error::InvalidConfig(err.to_string()))
    }

    /// Adds or replaces the clip `name`.
    pub fn with<T: Into<String>>(mut self, name: T, params: ClipParams) -> Self {
        self.clips.insert(name.into(), params);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Validates every entry and returns the descriptors in name order.
    pub fn descriptors(&self) -> Result<Vec<ClipDescriptor>> {
        let mut descriptors = Vec::with_capacity(self.clips.len());

        for (name, params) in &self.clips {
            if name.trim().is_empty() {
                return Err(Error::InvalidConfig("clip names must not be empty".into()));
            }

            if params.file.trim().is_empty() {
                return Err(Error::InvalidConfig(format!(
                    "clip {} does not have a file",
                    name
                )));
            }

            descriptors.push(ClipDescriptor {
                name: name.clone(),
                source: params.file.clone(),
                loops: params.loops,
                interrupt: params.interrupt,
            });
        }

        Ok(descriptors)
    }
}
