//! File system access for the site writer
//!
//! `LocalFs` writes through a temp file in the target directory and
//! renames it into place, so a reader never sees a half-written page.

use std::io::Write;
use std::path::Path;

use crate::domain::value_objects::ContentHash;
use crate::error::FolioResult;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MockFileSystem` - in-memory for testing
pub trait FileSystem {
    /// Read file content
    fn read_to_string(&self, path: &Path) -> FolioResult<String>;

    /// Write file content, creating parent directories
    fn write(&self, path: &Path, content: &str) -> FolioResult<()>;

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;

    /// SHA-256 of the file content
    fn hash_file(&self, path: &Path) -> FolioResult<ContentHash> {
        let content = self.read_to_string(path)?;
        Ok(ContentHash::from_content(&content))
    }
}

/// Local file system implementation
#[derive(Debug, Clone, Copy)]
pub struct LocalFs {
    atomic: bool,
}

impl Default for LocalFs {
    fn default() -> Self {
        Self { atomic: true }
    }
}

impl LocalFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain `fs::write` instead of temp file + rename
    pub fn non_atomic() -> Self {
        Self { atomic: false }
    }
}

impl FileSystem for LocalFs {
    fn read_to_string(&self, path: &Path) -> FolioResult<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(&self, path: &Path, content: &str) -> FolioResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        if self.atomic {
            atomic_write(path, content.as_bytes())
        } else {
            Ok(std::fs::write(path, content)?)
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn hash_file(&self, path: &Path) -> FolioResult<ContentHash> {
        let bytes = std::fs::read(path)?;
        Ok(ContentHash::from_bytes(&bytes))
    }
}

/// Write content to a file atomically
///
/// Uses tempfile + rename so the temp file lands on the same filesystem.
pub fn atomic_write(path: &Path, content: &[u8]) -> FolioResult<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Mock file system for testing
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: std::sync::Arc<
        std::sync::Mutex<std::collections::HashMap<std::path::PathBuf, String>>,
    >,
}

#[cfg(test)]
impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> FolioResult<String> {
        self.get(path).ok_or_else(|| {
            crate::error::FolioError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "File not found",
            ))
        })
    }

    fn write(&self, path: &Path, content: &str) -> FolioResult<()> {
        let mut files = self.files.lock().unwrap();
        files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}
