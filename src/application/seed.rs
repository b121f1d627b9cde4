use crate::application::add_document::AddDocumentUseCase;
use crate::domain::error::DomainError;
use crate::domain::ports::document_store::DocumentStore;
use std::sync::Arc;

/// Sample corpus loaded into an empty store on first start.
pub const DEMO_DOCUMENTS: [&str; 5] = [
    "O marketing digital é essencial para empresas hoje em dia.",
    "SEO on-page otimiza o conteúdo de uma página para motores de busca.",
    "Mapas mentais são ferramentas visuais para organizar ideias.",
    "Gerenciamento de vídeos e sua otimização para plataformas.",
    "Inteligência artificial e aprendizado de máquina estão revolucionando a análise de dados.",
];

pub struct SeedDemoUseCase {
    store: Arc<dyn DocumentStore>,
    add: AddDocumentUseCase,
}

impl SeedDemoUseCase {
    pub fn new(store: Arc<dyn DocumentStore>, add: AddDocumentUseCase) -> Self {
        Self { store, add }
    }

    /// Returns how many documents were inserted: all of them on an empty
    /// store, none otherwise.
    pub async fn execute(&self) -> Result<usize, DomainError> {
        let existing = self.store.count()?;
        if existing > 0 {
            tracing::info!(existing, "store already populated, skipping demo documents");
            return Ok(0);
        }

        for text in DEMO_DOCUMENTS {
            self.add.execute(text).await?;
        }
        tracing::info!(inserted = DEMO_DOCUMENTS.len(), "inserted demo documents");
        Ok(DEMO_DOCUMENTS.len())
    }
}
