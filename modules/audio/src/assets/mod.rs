pub mod buffer;
pub mod decoder;

pub mod prelude {
    pub use super::buffer::AudioBuffer;
    pub use super::decoder::{Decode, Decoded, OggDecoder};
}
