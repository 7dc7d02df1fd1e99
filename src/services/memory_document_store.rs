use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::AppError;
use crate::ports::PromptDocumentStore;

/// In-memory document store for tests and embedding hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    // Shared so clones observe each other's writes.
    documents: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn documents(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.documents.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PromptDocumentStore for MemoryDocumentStore {
    fn read_document(&self, path: &str) -> Result<String, AppError> {
        self.documents()
            .get(path)
            .cloned()
            .ok_or_else(|| AppError::DocumentNotFound(path.to_string()))
    }

    fn write_document(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.documents().insert(path.to_string(), content.to_string());
        Ok(())
    }

    fn document_exists(&self, path: &str) -> bool {
        self.documents().contains_key(path)
    }
}
