//! Filesystem-backed prompt document store.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;
use crate::ports::PromptDocumentStore;

/// Document store rooted at a directory. Paths may not escape the root.
#[derive(Debug, Clone)]
pub struct FilesystemDocumentStore {
    root: PathBuf,
}

impl FilesystemDocumentStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store rooted at the current working directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, AppError> {
        let path = Path::new(path);
        let full_path = if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) };

        let normalized_path = normalize_path(&full_path);
        if !normalized_path.starts_with(normalize_path(&self.root)) {
            return Err(AppError::PathTraversal(path.display().to_string()));
        }
        Ok(normalized_path)
    }
}

impl PromptDocumentStore for FilesystemDocumentStore {
    fn read_document(&self, path: &str) -> Result<String, AppError> {
        let full_path = self.resolve(path)?;
        if !full_path.is_file() {
            return Err(AppError::DocumentNotFound(path.to_string()));
        }
        fs::read_to_string(full_path).map_err(AppError::from)
    }

    fn write_document(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve(path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full_path, content).map_err(AppError::from)
    }

    fn document_exists(&self, path: &str) -> bool {
        self.resolve(path).is_ok_and(|p| p.is_file())
    }
}

/// Resolve `.` and `..` components logically, without touching the filesystem.
fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                normalized.push(component.as_os_str());
            }
        }
    }
    normalized
}
