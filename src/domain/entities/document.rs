use serde::Serialize;

/// A stored text sample. `id` is assigned by the store on insert and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub id: i64,
    pub text: String,
    #[serde(skip_serializing)]
    pub embedding: Vec<f32>,
}

/// A document paired with its cosine similarity to a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarDocument {
    pub id: i64,
    pub text: String,
    pub score: f64,
}
