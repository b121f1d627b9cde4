//! Placeholder embedder.
//!
//! Vectors carry no meaning beyond being reproducible: the generator is
//! seeded from a hash of the text, so identical strings always map to
//! identical vectors. Swap in a real model through [`EmbeddingProvider`].

use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::domain::values::embedding::EMBEDDING_DIM;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};

const SEED_MODULUS: u64 = (1 << 32) - 1;

pub struct SeededEmbedder {
    dim: usize,
}

impl Default for SeededEmbedder {
    fn default() -> Self {
        Self { dim: EMBEDDING_DIM }
    }
}

impl SeededEmbedder {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    /// Uniform draws in `[0, 1)` from a generator seeded by [`seed_for`].
    pub fn embed_one(&self, text: &str) -> Vec<f32> {
        let mut rng = StdRng::seed_from_u64(seed_for(text));
        (0..self.dim).map(|_| rng.random::<f32>()).collect()
    }
}

/// SHA-256 of the text, first eight bytes read little-endian, reduced
/// modulo 2^32 - 1.
pub fn seed_for(text: &str) -> u64 {
    let digest = Sha256::digest(text.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(head) % SEED_MODULUS
}

#[async_trait::async_trait]
impl EmbeddingProvider for SeededEmbedder {
    async fn embed(&self, texts: &[String], _input_type: InputType) -> Result<Vec<Vec<f32>>, DomainError> {
        Ok(texts.iter().map(|t| self.embed_one(t)).collect())
    }

    fn dimension(&self) -> usize {
        self.dim
    }
}
