use std::fmt;

use failure::Fail;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Track {} has not been loaded.", _0)]
    TrackNotFound(String),
    #[fail(display = "Track {} is still loading.", _0)]
    NotReady(String),
    #[fail(display = "Track {} has been registered already.", _0)]
    Duplicated(String),
    #[fail(display = "Malformed batch config: {}.", _0)]
    InvalidConfig(String),
    #[fail(display = "The audio output has been discarded.")]
    Discarded,
    #[fail(display = "Voice {} has been started already.", _0)]
    VoiceConsumed(u32),
    #[fail(display = "{}", _0)]
    Output(String),
}

pub type Result<T> = ::std::result::Result<T, Error>;

/// The fetch or decode of one clip in a batch failed. Failures are collected and reported
/// along with the batch, they never abort the loading of other clips.
#[derive(Debug)]
pub struct LoadFailure {
    pub name: String,
    pub cause: failure::Error,
}

impl LoadFailure {
    pub fn new<T: Into<String>>(name: T, cause: failure::Error) -> Self {
        LoadFailure {
            name: name.into(),
            cause,
        }
    }
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Failed to load track {}: {}", self.name, self.cause)
    }
}

impl Fail for LoadFailure {
    fn cause(&self) -> Option<&dyn Fail> {
        Some(self.cause.as_fail())
    }
}
