//! Persist finished `vgg` buffers.
//!
//! `vgg` only fills a byte buffer. This crate provides the other half: handing
//! the finished bytes to a named destination, usually a file.
//!
//! ```no_run
//! let mut buffer = [0u8; 1024];
//! let mut w = vgg::SvgWriter::new(&mut buffer);
//! w.start(10.0, 10.0);
//! w.end();
//!
//! vgg_platform_write::write_file("test.svg", w.finish()).unwrap();
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The destination name was empty.
    #[error("Destination name is empty")]
    EmptyName,

    /// The destination could not be created or truncated.
    #[error("Failed to create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The destination was created but not all bytes could be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Somewhere to put a finished document.
pub trait Sink {
    /// Stores `bytes` under `name`, replacing anything previously stored
    /// there.
    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<()>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        (**self).write(name, bytes)
    }
}

/// Writes each document to a file, created or truncated as needed.
#[derive(Clone, Debug, Default)]
pub struct FileSink {
    root: Option<PathBuf>,
}

impl FileSink {
    /// Names are used as paths as they are.
    pub fn new() -> Self {
        FileSink { root: None }
    }

    /// Names are resolved relative to `root`.
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        FileSink { root: Some(root.into()) }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(name),
            None => PathBuf::from(name),
        }
    }

    fn write_to(path: &Path, bytes: &[u8]) -> Result<()> {
        let mut file = File::create(path).map_err(|source| Error::Create {
            path: path.to_path_buf(),
            source,
        })?;

        file.write_all(bytes)
            .and_then(|_| file.flush())
            .map_err(|source| Error::Write {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl Sink for FileSink {
    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        let path = self.path(name);
        match FileSink::write_to(&path, bytes) {
            Ok(()) => {
                debug!("Wrote {} bytes to {}", bytes.len(), path.display());
                Ok(())
            }
            Err(e) => {
                warn!("{}", e);
                Err(e)
            }
        }
    }
}

/// Keeps documents in memory, mostly useful for tests.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink::default()
    }

    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Sink for MemorySink {
    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        debug!("Stored {} bytes as {}", bytes.len(), name);
        self.entries.insert(name.to_string(), bytes.to_vec());
        Ok(())
    }
}

/// Writes `bytes` to the file `name`, creating or truncating it.
pub fn write_file(name: &str, bytes: &[u8]) -> Result<()> {
    FileSink::new().write(name, bytes)
}
