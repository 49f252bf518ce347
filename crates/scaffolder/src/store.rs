//! File-store collaborator used by the catalog, validator, and generator.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::ScaffoldError;

/// Minimal filesystem surface the core depends on.
pub trait FileStore: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    /// Entry names directly under `path`, in the store's own listing order.
    fn list_entries(&self, path: &Path) -> Result<Vec<String>, ScaffoldError>;
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, ScaffoldError>;
    fn write_bytes(&self, path: &Path, content: &[u8]) -> Result<(), ScaffoldError>;
    fn ensure_dir(&self, path: &Path) -> Result<(), ScaffoldError>;

    /// Reads `path` as UTF-8. Anything else fails with [`io::ErrorKind::InvalidData`].
    fn read_text(&self, path: &Path) -> Result<String, ScaffoldError> {
        let bytes = self.read_bytes(path)?;
        String::from_utf8(bytes).map_err(|err| {
            ScaffoldError::io(path, io::Error::new(io::ErrorKind::InvalidData, err))
        })
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<(), ScaffoldError> {
        self.write_bytes(path, content.as_bytes())
    }
}

/// `std::fs` backed store. Listing order is whatever the OS returns.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsStore;

impl FsStore {
    pub fn new() -> Self {
        Self
    }
}

impl FileStore for FsStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_entries(&self, path: &Path) -> Result<Vec<String>, ScaffoldError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path).map_err(|err| ScaffoldError::io(path, err))? {
            let entry = entry.map_err(|err| ScaffoldError::io(path, err))?;
            let name = entry.file_name().into_string().map_err(|raw| {
                ScaffoldError::io(
                    path.join(&raw),
                    io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("entry name {raw:?} is not valid UTF-8"),
                    ),
                )
            })?;
            names.push(name);
        }
        Ok(names)
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, ScaffoldError> {
        fs::read(path).map_err(|err| ScaffoldError::io(path, err))
    }

    fn write_bytes(&self, path: &Path, content: &[u8]) -> Result<(), ScaffoldError> {
        fs::write(path, content).map_err(|err| ScaffoldError::io(path, err))
    }

    fn ensure_dir(&self, path: &Path) -> Result<(), ScaffoldError> {
        fs::create_dir_all(path).map_err(|err| ScaffoldError::io(path, err))
    }
}

#[derive(Clone, Debug)]
enum MemoryNode {
    File(Vec<u8>),
    Dir,
}

/// In-memory store keyed by normalized path. Listing order is lexical.
#[derive(Default)]
pub struct MemoryStore {
    nodes: Mutex<BTreeMap<PathBuf, MemoryNode>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts raw bytes at `path`, creating parent directories.
    pub fn insert_bytes(&self, path: impl AsRef<Path>, bytes: impl Into<Vec<u8>>) {
        let path = normalize(path.as_ref());
        let mut nodes = self.nodes.lock();
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            nodes.insert(ancestor.to_path_buf(), MemoryNode::Dir);
        }
        nodes.insert(path, MemoryNode::File(bytes.into()));
    }

    pub fn insert_file(&self, path: impl AsRef<Path>, content: &str) {
        self.insert_bytes(path, content.as_bytes().to_vec());
    }

    pub fn insert_dir(&self, path: impl AsRef<Path>) {
        let path = normalize(path.as_ref());
        let mut nodes = self.nodes.lock();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            nodes.insert(ancestor.to_path_buf(), MemoryNode::Dir);
        }
    }

    /// Returns the text stored at `path`, if it is a UTF-8 file.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        match self.nodes.lock().get(&normalize(path.as_ref())) {
            Some(MemoryNode::File(bytes)) => String::from_utf8(bytes.clone()).ok(),
            _ => None,
        }
    }

    pub fn bytes(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        match self.nodes.lock().get(&normalize(path.as_ref())) {
            Some(MemoryNode::File(bytes)) => Some(bytes.clone()),
            _ => None,
        }
    }

    /// Number of files currently stored.
    pub fn file_count(&self) -> usize {
        self.nodes
            .lock()
            .values()
            .filter(|node| matches!(node, MemoryNode::File(_)))
            .count()
    }
}

impl FileStore for MemoryStore {
    fn exists(&self, path: &Path) -> bool {
        self.nodes.lock().contains_key(&normalize(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(
            self.nodes.lock().get(&normalize(path)),
            Some(MemoryNode::Dir)
        )
    }

    fn list_entries(&self, path: &Path) -> Result<Vec<String>, ScaffoldError> {
        let dir = normalize(path);
        let nodes = self.nodes.lock();
        match nodes.get(&dir) {
            Some(MemoryNode::Dir) => {}
            Some(MemoryNode::File(_)) => {
                return Err(ScaffoldError::io(
                    path,
                    io::Error::other("not a directory"),
                ));
            }
            None => return Err(not_found(path)),
        }
        Ok(nodes
            .keys()
            .filter(|candidate| candidate.parent() == Some(dir.as_path()))
            .filter_map(|candidate| candidate.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, ScaffoldError> {
        match self.nodes.lock().get(&normalize(path)) {
            Some(MemoryNode::File(bytes)) => Ok(bytes.clone()),
            Some(MemoryNode::Dir) => Err(ScaffoldError::io(
                path,
                io::Error::other("is a directory"),
            )),
            None => Err(not_found(path)),
        }
    }

    fn write_bytes(&self, path: &Path, content: &[u8]) -> Result<(), ScaffoldError> {
        let normalized = normalize(path);
        let mut nodes = self.nodes.lock();
        if let Some(parent) = normalized.parent() {
            if !parent.as_os_str().is_empty()
                && !matches!(nodes.get(parent), Some(MemoryNode::Dir))
            {
                return Err(not_found(parent));
            }
        }
        if matches!(nodes.get(&normalized), Some(MemoryNode::Dir)) {
            return Err(ScaffoldError::io(path, io::Error::other("is a directory")));
        }
        nodes.insert(normalized, MemoryNode::File(content.to_vec()));
        Ok(())
    }

    fn ensure_dir(&self, path: &Path) -> Result<(), ScaffoldError> {
        let normalized = normalize(path);
        let mut nodes = self.nodes.lock();
        for ancestor in normalized.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            if let Some(MemoryNode::File(_)) = nodes.get(ancestor) {
                return Err(ScaffoldError::io(
                    ancestor,
                    io::Error::other("not a directory"),
                ));
            }
        }
        for ancestor in normalized.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            nodes.insert(ancestor.to_path_buf(), MemoryNode::Dir);
        }
        Ok(())
    }
}

impl<S> FileStore for Arc<S>
where
    S: FileStore + ?Sized,
{
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn list_entries(&self, path: &Path) -> Result<Vec<String>, ScaffoldError> {
        (**self).list_entries(path)
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, ScaffoldError> {
        (**self).read_bytes(path)
    }

    fn write_bytes(&self, path: &Path, content: &[u8]) -> Result<(), ScaffoldError> {
        (**self).write_bytes(path, content)
    }

    fn read_text(&self, path: &Path) -> Result<String, ScaffoldError> {
        (**self).read_text(path)
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<(), ScaffoldError> {
        (**self).write_text(path, content)
    }

    fn ensure_dir(&self, path: &Path) -> Result<(), ScaffoldError> {
        (**self).ensure_dir(path)
    }
}

fn not_found(path: &Path) -> ScaffoldError {
    ScaffoldError::io(
        path,
        io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
    )
}

/// Resolves `.` and `..` lexically without touching the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    let mut pending_parents: usize = 0;

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if normalized
                    .components()
                    .next_back()
                    .is_some_and(|c| matches!(c, Component::Normal(_)))
                {
                    normalized.pop();
                } else if normalized.is_absolute() {
                    // Ignore attempts to go above the root for absolute paths.
                } else {
                    pending_parents += 1;
                }
            }
            Component::Normal(part) => {
                while pending_parents > 0 {
                    normalized.push("..");
                    pending_parents -= 1;
                }
                normalized.push(part);
            }
        }
    }

    while pending_parents > 0 {
        normalized.push("..");
        pending_parents -= 1;
    }

    normalized
}
