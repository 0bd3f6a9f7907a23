//! Path aliases. A shortcut like `res:` is expanded into the directory it stands for before a
//! locator gets parsed, so configs could be written without absolute paths.

use std::collections::HashMap;

/// Central registry for shortcut definitions.
#[derive(Debug, Default, Clone)]
pub struct ShortcutResolver {
    aliases: HashMap<String, String>,
}

impl ShortcutResolver {
    pub fn new() -> Self {
        ShortcutResolver {
            aliases: HashMap::new(),
        }
    }

    /// Add or replace a shortcut definition.
    pub fn add<T1, T2>(&mut self, shortcut: T1, fullname: T2) -> Result<(), failure::Error>
    where
        T1: Into<String>,
        T2: Into<String>,
    {
        let shortcut = shortcut.into();
        let fullname = fullname.into();

        if !shortcut.ends_with(':') {
            bail!("Shortcut {} must end with a colon (':').", shortcut);
        }

        // A single letter followed by a colon is a DOS drive.
        if shortcut.len() < 3 {
            bail!("Shortcut {} must have at least 2 letters.", shortcut);
        }

        if !fullname.ends_with(':') && !fullname.ends_with('/') {
            bail!(
                "Shortcut {} must expand to a directory ('/') or another shortcut (':'), not {}.",
                shortcut,
                fullname
            );
        }

        self.aliases.insert(shortcut, fullname);
        Ok(())
    }

    #[inline]
    pub fn has<T: AsRef<str>>(&self, shortcut: T) -> bool {
        self.aliases.contains_key(shortcut.as_ref())
    }

    /// Expands shortcuts at the head of `src` until a schema or a plain path is left. Returns
    /// `None` if an unknown shortcut is met, or if the definitions refer to each other in
    /// a cycle. Paths starting with a DOS drive are left as they are.
    pub fn resolve<T: AsRef<str>>(&self, src: T) -> Option<String> {
        let mut dst = src.as_ref().to_owned();

        for _ in 0..=self.aliases.len() {
            if dst.contains("://") {
                return Some(dst);
            }

            let index = match dst.find(':') {
                Some(index) => index,
                None => return Some(dst),
            };

            let fullname = match self.aliases.get(&dst[..=index]) {
                Some(fullname) => fullname,
                // A DOS drive like `C:\sounds\click.ogg` is a plain path.
                None if is_drive(&dst[..index]) => return Some(dst),
                None => return None,
            };

            dst.replace_range(..=index, fullname);
        }

        None
    }
}

#[inline]
fn is_drive(prefix: &str) -> bool {
    prefix.len() == 1 && prefix.chars().all(|c| c.is_ascii_alphabetic())
}
