//! Pluggable sources of bytes, keyed by the schema of a locator.

pub mod dir;
pub use self::dir::Dir;

pub mod memory;
pub use self::memory::Memory;

use std::collections::HashMap;
use std::sync::Arc;

use crate::sched::prelude::LockLatch;

use super::locator::Locator;
use super::request::Response;

/// Fetches the raw bytes behind a locator.
///
/// Implementations decide when, and on which thread, the latch gets set. The latch must be
/// set eventually, with either the bytes or the reason why they could not be read.
pub trait Fetch: Send + Sync + 'static {
    fn request(&self, locator: &Locator, state: Arc<LockLatch<Response>>);
}

/// The table of mounted fetchers.
#[derive(Default)]
pub struct SchemaResolver {
    schemas: HashMap<String, Arc<dyn Fetch>>,
}

impl SchemaResolver {
    pub fn new() -> Self {
        SchemaResolver {
            schemas: HashMap::new(),
        }
    }

    /// Mounts `fetcher` for locators with `schema`.
    pub fn add<T, F>(&mut self, schema: T, fetcher: F) -> Result<(), failure::Error>
    where
        T: Into<String>,
        F: Fetch,
    {
        let schema = schema.into().to_ascii_lowercase();
        if self.schemas.contains_key(&schema) {
            bail!("Schema {} has been mounted already.", schema);
        }

        self.schemas.insert(schema, Arc::new(fetcher));
        Ok(())
    }

    #[inline]
    pub fn has<T: AsRef<str>>(&self, schema: T) -> bool {
        self.schemas.contains_key(schema.as_ref())
    }

    /// Returns the fetcher mounted for `schema`.
    pub fn locate<T: AsRef<str>>(&self, schema: T) -> Result<Arc<dyn Fetch>, failure::Error> {
        let schema = schema.as_ref();
        self.schemas
            .get(schema)
            .cloned()
            .ok_or_else(|| format_err!("Schema {} has not been mounted.", schema))
    }
}
