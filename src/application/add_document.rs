use crate::domain::entities::document::Document;
use crate::domain::error::DomainError;
use crate::domain::ports::document_store::DocumentStore;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use std::sync::Arc;

#[derive(Clone)]
pub struct AddDocumentUseCase {
    store: Arc<dyn DocumentStore>,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl AddDocumentUseCase {
    pub fn new(store: Arc<dyn DocumentStore>, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self { store, embedder }
    }

    pub async fn execute(&self, text: &str) -> Result<Document, DomainError> {
        let embedding = self
            .embedder
            .embed(&[text.to_string()], InputType::Document)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::Embedding("provider returned no vector".into()))?;

        let id = self.store.insert(text, &embedding)?;
        tracing::debug!(id, dim = embedding.len(), "stored document");

        Ok(Document {
            id,
            text: text.to_string(),
            embedding,
        })
    }
}
