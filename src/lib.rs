pub mod application;
pub mod cli;
pub mod domain;
pub mod http;
pub mod infrastructure;

use crate::application::add_document::AddDocumentUseCase;
use crate::application::analyze::AnalyzeContentUseCase;
use crate::application::search::SearchUseCase;
use crate::application::seed::SeedDemoUseCase;
use crate::domain::entities::document::{Document, SimilarDocument};
use crate::domain::entities::report::ContentReport;
use crate::domain::error::DomainError;
use crate::domain::ports::document_store::DocumentStore;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::infrastructure::embeddings::seeded::SeededEmbedder;
use crate::infrastructure::sqlite::document_store::SqliteDocumentStore;
use std::sync::Arc;

pub struct ContentLens {
    store: Arc<dyn DocumentStore>,
    add_document_uc: AddDocumentUseCase,
    search_uc: SearchUseCase,
    analyze_uc: AnalyzeContentUseCase,
    seed_uc: SeedDemoUseCase,
}

impl ContentLens {
    /// Open `db_path` with the seeded placeholder embedder.
    pub fn open(db_path: &str) -> Result<Self, DomainError> {
        Self::with_providers(db_path, Arc::new(SeededEmbedder::default()))
    }

    pub fn with_providers(
        db_path: &str,
        embedder: Arc<dyn EmbeddingProvider>,
    ) -> Result<Self, DomainError> {
        let store = SqliteDocumentStore::open(db_path)?;
        store.ensure_schema()?;
        Self::with_store(Arc::new(store), embedder)
    }

    pub fn with_store(
        store: Arc<dyn DocumentStore>,
        embedder: Arc<dyn EmbeddingProvider>,
    ) -> Result<Self, DomainError> {
        let provider_dim = embedder.dimension();
        if let Some(stored_dim) = store.stored_dimension()? {
            if stored_dim != provider_dim {
                tracing::warn!(
                    stored_dim,
                    provider_dim,
                    "stored vectors and embedding provider disagree on dimension; searches will fail until the store is rebuilt"
                );
            }
        }

        let add_document_uc = AddDocumentUseCase::new(store.clone(), embedder.clone());
        let search_uc = SearchUseCase::new(store.clone(), embedder);

        Ok(Self {
            analyze_uc: AnalyzeContentUseCase::new(add_document_uc.clone(), search_uc.clone()),
            seed_uc: SeedDemoUseCase::new(store.clone(), add_document_uc.clone()),
            store,
            add_document_uc,
            search_uc,
        })
    }

    pub async fn add_document(&self, text: &str) -> Result<Document, DomainError> {
        self.add_document_uc.execute(text).await
    }

    pub async fn search(&self, query: &str, top_k: usize) -> Result<Vec<SimilarDocument>, DomainError> {
        self.search_uc.search(query, top_k).await
    }

    pub async fn analyze(&self, content: &str) -> Result<ContentReport, DomainError> {
        self.analyze_uc.execute(content).await
    }

    pub async fn seed_demo_documents(&self) -> Result<usize, DomainError> {
        self.seed_uc.execute().await
    }

    pub fn document_count(&self) -> Result<usize, DomainError> {
        self.store.count()
    }

    pub fn list_documents(&self) -> Result<Vec<Document>, DomainError> {
        self.store.list_all()
    }
}
