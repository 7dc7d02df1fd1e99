use crate::domain::AppError;

/// Port for the host's prompt documents.
///
/// Paths are relative to the store root. The store moves text only; encoding
/// and decoding prompts is done by the caller.
pub trait PromptDocumentStore {
    /// Read the full document text.
    fn read_document(&self, path: &str) -> Result<String, AppError>;

    /// Replace the full document text, creating parent directories as needed.
    fn write_document(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Check whether a document exists.
    fn document_exists(&self, path: &str) -> bool;
}
