use crate::application::add_document::AddDocumentUseCase;
use crate::application::search::SearchUseCase;
use crate::domain::entities::report::{word_count, ContentReport};
use crate::domain::error::DomainError;

/// Number of neighbours shown in the keyword chart.
pub const ANALYZE_TOP_K: usize = 5;

pub struct AnalyzeContentUseCase {
    add: AddDocumentUseCase,
    search: SearchUseCase,
}

impl AnalyzeContentUseCase {
    pub fn new(add: AddDocumentUseCase, search: SearchUseCase) -> Self {
        Self { add, search }
    }

    /// Store `content`, then search the updated store for it.
    ///
    /// Every call appends a row, so the analysed text becomes part of the
    /// corpus and usually ranks as its own top match. The insert and the
    /// search are separate statements; a failed search leaves the row in place.
    pub async fn execute(&self, content: &str) -> Result<ContentReport, DomainError> {
        if content.is_empty() {
            return Err(DomainError::InvalidInput("No text content provided.".into()));
        }

        let doc = self.add.execute(content).await?;
        let matches = self.search.search(content, ANALYZE_TOP_K).await?;

        tracing::info!(
            document_id = doc.id,
            words = word_count(content),
            matches = matches.len(),
            "analyzed content"
        );

        Ok(ContentReport::build(content, &matches))
    }
}
