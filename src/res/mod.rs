//! The `ResourceSystem` provides a standardized interface to load raw bytes asynchronously
//! from various places.
//!
//! # Locator
//!
//! Every resource is addressed by a `Locator`, which consists of two parts: a schema that
//! selects where the bytes come from, and a path that the selected fetcher understands.
//!
//! ```sh
//! "file:///Applications/My Game/sounds/click.ogg"
//! "mem://click"
//! ```
//!
//! ## Shortcut
//!
//! Shortcuts are aliases expanded before a locator gets parsed. Let's say all the sound clips
//! live in a `resources/sounds` directory. After defining the shortcut `snd:` pointing at that
//! directory, a clip could be written as `snd:click.ogg`.
//!
//! # Fetch
//!
//! Bytes are loaded by pluggable fetchers, each mounted for one schema. A `Dir` fetcher is
//! provided for the local host filesystem, and a `Memory` fetcher for blobs that are already
//! in process. Fetching never blocks the caller: a `Request` is returned immediately, and its
//! owner is responsible to poll it for completion.

pub mod locator;
pub mod request;
pub mod shortcut;
pub mod vfs;

pub mod prelude {
    pub use super::locator::Locator;
    pub use super::request::{Request, Response};
    pub use super::shortcut::ShortcutResolver;
    pub use super::vfs::{Dir, Fetch, Memory, SchemaResolver};
    pub use super::{ResourceParams, ResourceSystem};
}

use self::locator::Locator;
use self::request::{Request, Response};
use self::shortcut::ShortcutResolver;
use self::vfs::{Fetch, SchemaResolver};

/// The setup parameters of `ResourceSystem`.
pub struct ResourceParams {
    pub shortcuts: ShortcutResolver,
    pub schemas: SchemaResolver,
}

impl Default for ResourceParams {
    fn default() -> Self {
        let mut schemas = SchemaResolver::new();
        schemas
            .add(locator::DEFAULT_SCHEMA, vfs::Dir::new())
            .expect("the schema table starts empty");

        ResourceParams {
            shortcuts: ShortcutResolver::new(),
            schemas,
        }
    }
}

/// Takes care of loading bytes asynchronously through pluggable fetchers.
pub struct ResourceSystem {
    shortcuts: ShortcutResolver,
    schemas: SchemaResolver,
}

impl ResourceSystem {
    pub fn new(params: ResourceParams) -> Self {
        ResourceSystem {
            shortcuts: params.shortcuts,
            schemas: params.schemas,
        }
    }

    /// Mounts a fetcher for locators with `schema`.
    pub fn mount<T, F>(&mut self, schema: T, fetcher: F) -> Result<(), failure::Error>
    where
        T: Into<String>,
        F: Fetch,
    {
        let schema = schema.into();
        info!("Mounts fetcher for schema {}.", schema);
        self.schemas.add(schema, fetcher)
    }

    /// Adds or replaces a shortcut definition.
    #[inline]
    pub fn add_shortcut<T1, T2>(&mut self, shortcut: T1, fullname: T2) -> Result<(), failure::Error>
    where
        T1: Into<String>,
        T2: Into<String>,
    {
        self.shortcuts.add(shortcut, fullname)
    }

    /// Expands shortcuts and parses the result into a `Locator`.
    pub fn locate<T: AsRef<str>>(&self, src: T) -> Result<Locator, failure::Error> {
        let src = src.as_ref();
        let expanded = self
            .shortcuts
            .resolve(src)
            .ok_or_else(|| format_err!("Could not resolve shortcuts of {}.", src))?;

        Locator::new(expanded)
    }

    /// Fetches bytes asynchronously. This method returns a `Request` immediately, its the
    /// user's responsibility to store the object and poll it for completion.
    pub fn fetch<T: AsRef<str>>(&self, src: T) -> Result<Request<Response>, failure::Error> {
        let locator = self.locate(src)?;
        let fetcher = self.schemas.locate(locator.schema())?;

        let state = Request::latch();
        fetcher.request(&locator, state.clone());
        Ok(Request::new(state))
    }
}
