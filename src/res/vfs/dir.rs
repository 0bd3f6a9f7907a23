use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use crate::sched::prelude::LockLatch;

use super::super::locator::Locator;
use super::super::request::Response;
use super::Fetch;

/// Reads files from the local host filesystem on worker threads.
#[derive(Debug, Default, Clone)]
pub struct Dir {
    root: Option<PathBuf>,
}

impl Dir {
    /// Creates a fetcher which takes locator paths as they are.
    pub fn new() -> Self {
        Dir { root: None }
    }

    /// Creates a fetcher which reads relative locator paths under `root`.
    pub fn rooted<T: Into<PathBuf>>(root: T) -> Result<Self, failure::Error> {
        let root = root.into();
        if !root.is_dir() {
            bail!("{:?} is not a readable directory.", root);
        }

        info!("Creates directory based fetcher at {:?}.", root);
        Ok(Dir { root: Some(root) })
    }

    fn path(&self, locator: &Locator) -> PathBuf {
        match self.root {
            Some(ref root) => root.join(locator.path()),
            None => PathBuf::from(locator.path()),
        }
    }
}

fn read(path: PathBuf) -> Response {
    let mut file = fs::File::open(&path)
        .map_err(|err| format_err!("Failed to open {:?}: {}.", path, err))?;

    let mut buf = Vec::new();
    file.read_to_end(&mut buf)?;
    Ok(buf.into_boxed_slice())
}

impl Fetch for Dir {
    fn request(&self, locator: &Locator, state: Arc<LockLatch<Response>>) {
        let path = self.path(locator);
        let tx = state.clone();

        if let Err(err) = crate::sched::spawn(move || tx.set(read(path))) {
            state.set(Err(err));
        }
    }
}
