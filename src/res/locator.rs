//! Where the bytes of a resource live.

use std::fmt;

/// The schema assumed when a locator is written as a plain path.
pub const DEFAULT_SCHEMA: &str = "file";

/// A parsed resource location in the form of `<schema>://<path>`.
///
/// Plain paths like `sounds/click.ogg` are accepted as well, and are located with the
/// `file` schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
    schema: String,
    path: String,
}

impl Locator {
    /// Parses a locator.
    pub fn new<T: AsRef<str>>(src: T) -> Result<Self, failure::Error> {
        let src = src.as_ref().trim();

        let (schema, path) = match src.find("://") {
            Some(index) => (&src[..index], &src[index + 3..]),
            None => (DEFAULT_SCHEMA, src),
        };

        if schema.is_empty() {
            bail!("Locator({}) has an empty schema.", src);
        }

        if !schema
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
        {
            bail!("Locator({}) has a malformed schema.", src);
        }

        if path.is_empty() {
            bail!("Locator({}) does not point to anything.", src);
        }

        Ok(Locator {
            schema: schema.to_ascii_lowercase(),
            path: path.to_owned(),
        })
    }

    #[inline]
    pub fn schema(&self) -> &str {
        &self.schema
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}://{}", self.schema, self.path)
    }
}
