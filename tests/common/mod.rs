//! Shared test helpers.

use contentlens::domain::error::DomainError;
use contentlens::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use contentlens::ContentLens;
use std::sync::Arc;

pub fn setup() -> ContentLens {
    ContentLens::open(":memory:").unwrap()
}

pub fn setup_with(embedder: Arc<dyn EmbeddingProvider>) -> ContentLens {
    ContentLens::with_providers(":memory:", embedder).unwrap()
}

/// Produces no vectors at all.
pub struct EmptyEmbedder;

#[async_trait::async_trait]
impl EmbeddingProvider for EmptyEmbedder {
    async fn embed(&self, _texts: &[String], _input_type: InputType) -> Result<Vec<Vec<f32>>, DomainError> {
        Ok(vec![])
    }

    fn dimension(&self) -> usize {
        0
    }
}

/// Returns the same vector for every text, so every stored document ties.
pub struct ConstantEmbedder;

#[async_trait::async_trait]
impl EmbeddingProvider for ConstantEmbedder {
    async fn embed(&self, texts: &[String], _input_type: InputType) -> Result<Vec<Vec<f32>>, DomainError> {
        Ok(texts.iter().map(|_| vec![1.0, 2.0, 3.0]).collect())
    }

    fn dimension(&self) -> usize {
        3
    }
}
