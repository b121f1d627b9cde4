use crate::domain::entities::document::Document;
use crate::domain::error::DomainError;

/// Append-only table of documents and their embeddings.
pub trait DocumentStore: Send + Sync {
    /// Create the backing table if it does not exist. Safe to call repeatedly.
    fn ensure_schema(&self) -> Result<(), DomainError>;
    /// Append a row and return its assigned id. Duplicate texts are allowed.
    fn insert(&self, text: &str, embedding: &[f32]) -> Result<i64, DomainError>;
    /// Every row, in insertion order.
    fn list_all(&self) -> Result<Vec<Document>, DomainError>;
    fn count(&self) -> Result<usize, DomainError>;
    fn stored_dimension(&self) -> Result<Option<usize>, DomainError>;
}
