//! Optional semantic-similarity backend.
//!
//! A model is injected once when the orchestrator is built. When none is
//! available, [`NullSimilarityModel`] stands in and the semantic provider uses
//! its prefix fallback.

use std::collections::HashSet;
use std::sync::Arc;

pub trait SimilarityModel: Send + Sync {
    fn name(&self) -> &str;

    /// Whether the model can produce scores at all.
    fn is_available(&self) -> bool;

    /// Similarity in `[0, 1]`, or `None` when the model cannot score the pair.
    fn similarity(&self, a: &str, b: &str) -> Option<f64>;
}

pub type SharedSimilarityModel = Arc<dyn SimilarityModel>;

pub struct NullSimilarityModel;

impl SimilarityModel for NullSimilarityModel {
    fn name(&self) -> &str {
        "null"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn similarity(&self, _a: &str, _b: &str) -> Option<f64> {
        None
    }
}

/// Jaccard overlap of lowercase word sets. Lightweight stand-in for an
/// embedding model.
pub struct TokenOverlapModel;

impl SimilarityModel for TokenOverlapModel {
    fn name(&self) -> &str {
        "token-overlap"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn similarity(&self, a: &str, b: &str) -> Option<f64> {
        let a = a.to_lowercase();
        let b = b.to_lowercase();
        let left: HashSet<&str> = a.split_whitespace().collect();
        let right: HashSet<&str> = b.split_whitespace().collect();
        let union = left.union(&right).count();
        if union == 0 {
            return Some(0.0);
        }
        Some(left.intersection(&right).count() as f64 / union as f64)
    }
}

pub fn null_model() -> SharedSimilarityModel {
    Arc::new(NullSimilarityModel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_model_never_scores() {
        let model = NullSimilarityModel;
        assert!(!model.is_available());
        assert_eq!(model.similarity("a", "a"), None);
    }

    #[test]
    fn test_token_overlap_bounds() {
        let model = TokenOverlapModel;
        assert_eq!(model.similarity("a b", "A B"), Some(1.0));
        assert_eq!(model.similarity("a", "b"), Some(0.0));
        assert_eq!(model.similarity("", ""), Some(0.0));
        let partial = model.similarity("a b c", "a b d").unwrap();
        assert!((partial - 0.5).abs() < 1e-12);
    }
}
