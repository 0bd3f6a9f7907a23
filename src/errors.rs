//! The error type shared by the foundation crate. Modules with a closed set of failures define
//! their own error enums and convert into this one at the boundary.

pub use failure::Error;

pub type Result<T> = ::std::result::Result<T, Error>;
