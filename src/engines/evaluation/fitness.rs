use crate::data::CREDIBILITY_MARKERS;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const COMPLEXITY_WEIGHT: f64 = 0.1;
pub const OVERLAP_WEIGHT: f64 = 2.0;
pub const SOPHISTICATION_WEIGHT: f64 = 1.5;
pub const DIVERSITY_WEIGHT: f64 = 3.0;

/// Weighted terms that add up to a candidate's fitness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FitnessComponents {
    pub complexity: f64,
    pub overlap: f64,
    pub sophistication: f64,
    pub diversity: f64,
}

impl FitnessComponents {
    pub fn total(&self) -> f64 {
        self.complexity + self.overlap + self.sophistication + self.diversity
    }
}

/// Heuristic, surface-level scorer of a candidate against a target.
///
/// Unbounded above; confidence bounding happens in the orchestrator.
#[derive(Debug, Clone, Copy, Default)]
pub struct FitnessEvaluator;

impl FitnessEvaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, candidate: &str, target: &str) -> f64 {
        self.components(candidate, target).total()
    }

    pub fn components(&self, candidate: &str, target: &str) -> FitnessComponents {
        let lowered = candidate.to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();
        if tokens.is_empty() {
            return FitnessComponents::default();
        }

        let target_lowered = target.to_lowercase();
        let overlap = target_lowered
            .split_whitespace()
            .filter(|word| tokens.contains(word))
            .count();

        // each marker counts once, matched as a substring
        let sophistication = CREDIBILITY_MARKERS
            .iter()
            .filter(|marker| lowered.contains(**marker))
            .count();

        let unique: HashSet<&str> = tokens.iter().copied().collect();
        let diversity = unique.len() as f64 / tokens.len().max(1) as f64;

        FitnessComponents {
            complexity: tokens.len() as f64 * COMPLEXITY_WEIGHT,
            overlap: overlap as f64 * OVERLAP_WEIGHT,
            sophistication: sophistication as f64 * SOPHISTICATION_WEIGHT,
            diversity: diversity * DIVERSITY_WEIGHT,
        }
    }
}
