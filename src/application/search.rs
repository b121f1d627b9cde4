use crate::domain::entities::document::SimilarDocument;
use crate::domain::error::DomainError;
use crate::domain::ports::document_store::DocumentStore;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::domain::values::embedding::cosine_similarity;
use std::sync::Arc;

/// Brute-force cosine search over every stored document.
#[derive(Clone)]
pub struct SearchUseCase {
    store: Arc<dyn DocumentStore>,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl SearchUseCase {
    pub fn new(store: Arc<dyn DocumentStore>, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self { store, embedder }
    }

    pub async fn search(&self, query: &str, top_k: usize) -> Result<Vec<SimilarDocument>, DomainError> {
        let query_vec = self
            .embedder
            .embed(&[query.to_string()], InputType::Query)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::Embedding("provider returned no vector".into()))?;

        let mut results = self
            .store
            .list_all()?
            .into_iter()
            .map(|doc| {
                if doc.embedding.len() != query_vec.len() {
                    return Err(DomainError::Parse(format!(
                        "document {} has a {}-dim embedding, query has {}",
                        doc.id,
                        doc.embedding.len(),
                        query_vec.len()
                    )));
                }
                Ok(SimilarDocument {
                    score: cosine_similarity(&query_vec, &doc.embedding),
                    id: doc.id,
                    text: doc.text,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // stable: ties keep insertion order
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        results.truncate(top_k);
        Ok(results)
    }
}
