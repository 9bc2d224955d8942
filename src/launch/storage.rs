use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// What currently sits at a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Missing,
    Directory,
    Other,
}

/// The slice of persistent storage the launch hook touches.
pub trait PrivateStorage {
    /// Root of the application's permission-isolated storage.
    fn root(&self) -> io::Result<PathBuf>;

    fn entry_kind(&self, path: &Path) -> EntryKind;

    /// Create exactly one directory level. The parent is expected to exist.
    fn create_dir(&self, path: &Path) -> io::Result<()>;
}

/// [`PrivateStorage`] backed by the real filesystem.
#[derive(Clone, Debug)]
pub struct OsStorage {
    root: Result<PathBuf, String>,
}

impl OsStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Ok(root.into()),
        }
    }

    /// Storage whose root could not be resolved from the host.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            root: Err(reason.into()),
        }
    }
}

impl PrivateStorage for OsStorage {
    fn root(&self) -> io::Result<PathBuf> {
        self.root.clone().map_err(io::Error::other)
    }

    fn entry_kind(&self, path: &Path) -> EntryKind {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_dir() => EntryKind::Directory,
            Ok(_) => EntryKind::Other,
            Err(_) => EntryKind::Missing,
        }
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir(path)
    }
}
