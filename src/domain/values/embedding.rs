//! Embedding vectors and their on-disk byte encoding.
//!
//! Vectors are stored as packed little-endian `f32` values, four bytes per
//! component, with no header.

use crate::domain::error::DomainError;

/// Length of every vector produced by the seeded embedder.
pub const EMBEDDING_DIM: usize = 512;

pub fn encode_embedding(v: &[f32]) -> Vec<u8> {
    v.iter().flat_map(|f| f.to_le_bytes()).collect()
}

/// Decode a stored blob back into a vector.
///
/// Fails when the blob length is not a multiple of four.
pub fn decode_embedding(bytes: &[u8]) -> Result<Vec<f32>, DomainError> {
    if bytes.len() % 4 != 0 {
        return Err(DomainError::Parse(format!(
            "embedding blob has {} bytes, not a multiple of 4",
            bytes.len()
        )));
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

/// Cosine similarity accumulated in `f64`.
///
/// Mismatched lengths, empty input and zero-norm vectors all score 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let x = *x as f64;
        let y = *y as f64;
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 { 0.0 } else { dot / denom }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_preserves_bits() {
        let v = vec![0.0_f32, 1.0, -2.5, f32::MIN_POSITIVE, 0.123_456_79];
        let decoded = decode_embedding(&encode_embedding(&v)).unwrap();
        assert_eq!(decoded.len(), v.len());
        for (a, b) in v.iter().zip(decoded.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_encoded_length() {
        let v = vec![0.5_f32; EMBEDDING_DIM];
        assert_eq!(encode_embedding(&v).len(), EMBEDDING_DIM * 4);
    }

    #[test]
    fn test_decode_rejects_ragged_blob() {
        let err = decode_embedding(&[0, 0, 128]).unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn test_decode_empty_blob() {
        assert!(decode_embedding(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_cosine_identical() {
        let v = vec![0.2_f32, 0.4, 0.9];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_orthogonal_and_opposite() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
        assert!((cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_degenerate_inputs() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }
}
