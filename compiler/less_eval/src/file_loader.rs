//! File loading for `datauri`.
//!
//! Path resolution belongs to the embedding compiler, so the loader is a
//! swappable collaborator:
//! - Disk: reads from the file system, optionally relative to a root
//! - Memory: serves registered byte buffers (tests, in-browser builds)
//! - Denied: refuses every read
//!
//! # Performance
//! Uses enum dispatch instead of trait objects; there are only three
//! loaders and the set is closed.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

/// Failure to produce file content.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("file not found: {path}")]
    NotFound { path: String },
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("file access denied: {path}")]
    Denied { path: String },
}

/// Reads files from disk.
#[derive(Clone, Debug, Default)]
pub struct DiskFileLoader {
    root: Option<PathBuf>,
}

impl DiskFileLoader {
    /// Loader that resolves relative paths against the working directory.
    pub fn new() -> Self {
        DiskFileLoader { root: None }
    }

    /// Loader that resolves relative paths against `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        DiskFileLoader {
            root: Some(root.into()),
        }
    }

    /// Resolve `path` to the file that would be read.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let candidate = Path::new(path);
        match &self.root {
            Some(root) if candidate.is_relative() => root.join(candidate),
            _ => candidate.to_path_buf(),
        }
    }

    pub fn load(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        let resolved = self.resolve(path);
        std::fs::read(&resolved).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                LoadError::NotFound {
                    path: resolved.display().to_string(),
                }
            } else {
                LoadError::Io {
                    path: resolved.display().to_string(),
                    source,
                }
            }
        })
    }
}

/// Serves files from an in-memory map.
pub struct MemoryFileLoader {
    files: Mutex<FxHashMap<String, Vec<u8>>>,
}

impl MemoryFileLoader {
    pub fn new() -> Self {
        MemoryFileLoader {
            files: Mutex::new(FxHashMap::default()),
        }
    }

    /// Register (or replace) the content served for `path`.
    pub fn insert(&self, path: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.files.lock().insert(path.into(), content.into());
    }

    pub fn load(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        self.files
            .lock()
            .get(path)
            .cloned()
            .ok_or_else(|| LoadError::NotFound {
                path: path.to_string(),
            })
    }

    pub fn clear(&self) {
        self.files.lock().clear();
    }
}

impl Default for MemoryFileLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// File loader implementation using enum dispatch.
pub enum FileLoaderImpl {
    Disk(DiskFileLoader),
    Memory(MemoryFileLoader),
    /// Refuses every read.
    Denied,
}

impl FileLoaderImpl {
    /// Read the whole file at `path`.
    pub fn load(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        match self {
            Self::Disk(l) => l.load(path),
            Self::Memory(l) => l.load(path),
            Self::Denied => Err(LoadError::Denied {
                path: path.to_string(),
            }),
        }
    }
}

/// Shared file loader that can be passed around.
pub type SharedFileLoader = Arc<FileLoaderImpl>;

/// Create a loader reading from the working directory.
pub fn disk_loader() -> SharedFileLoader {
    Arc::new(FileLoaderImpl::Disk(DiskFileLoader::new()))
}

/// Create an empty in-memory loader.
pub fn memory_loader() -> SharedFileLoader {
    Arc::new(FileLoaderImpl::Memory(MemoryFileLoader::new()))
}

#[cfg(test)]
mod tests;
