use crate::types::{Candidate, FilterStrength, StrategyLabel};
use rand::Rng;
use std::collections::HashSet;

pub const SUCCESS_PROBABILITY_CAP: f64 = 0.95;
const CREATIVITY_WEIGHT: f64 = 0.3;
const DIVERSITY_STEP: f64 = 0.1;
const DIVERSITY_CAP: f64 = 0.3;

/// Confidence assigned to a candidate: `base` plus uniform jitter in `[0, jitter)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceRange {
    pub base: f64,
    pub jitter: f64,
}

impl ConfidenceRange {
    pub fn for_label(label: StrategyLabel) -> Self {
        let (base, jitter) = match label {
            StrategyLabel::Bias => (0.7, 0.2),
            StrategyLabel::Roleplay => (0.8, 0.15),
            StrategyLabel::Encoding => (0.6, 0.2),
            StrategyLabel::Semantic => (0.7, 0.2),
            StrategyLabel::Optimized => (0.75, 0.2),
            StrategyLabel::Multistep => (0.8, 0.15),
        };
        Self { base, jitter }
    }

    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        (self.base + rng.gen::<f64>() * self.jitter).clamp(0.0, 1.0)
    }
}

/// Aggregate estimate over the merged candidate list, capped at 0.95.
pub fn success_probability(candidates: &[Candidate], creativity: f64, filter: FilterStrength) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let avg_confidence =
        candidates.iter().map(|c| c.confidence).sum::<f64>() / candidates.len() as f64;
    // Distinct strategy labels, not distinct techniques.
    let distinct: HashSet<StrategyLabel> = candidates.iter().map(|c| c.strategy).collect();
    let diversity_bonus = (distinct.len() as f64 * DIVERSITY_STEP).min(DIVERSITY_CAP);

    let probability =
        avg_confidence * filter.multiplier() + creativity * CREATIVITY_WEIGHT + diversity_bonus;

    if probability.is_finite() {
        probability.clamp(0.0, SUCCESS_PROBABILITY_CAP)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn candidate(strategy: StrategyLabel, confidence: f64) -> Candidate {
        Candidate {
            text: "t".to_string(),
            strategy,
            technique: "t".to_string(),
            description: String::new(),
            confidence,
        }
    }

    #[test]
    fn test_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(8);
        let range = ConfidenceRange::for_label(StrategyLabel::Encoding);
        for _ in 0..200 {
            let c = range.draw(&mut rng);
            assert!((0.6..=0.8).contains(&c));
        }
    }

    #[test]
    fn test_empty_list_is_zero() {
        assert_eq!(success_probability(&[], 1.0, FilterStrength::Weak), 0.0);
    }

    #[test]
    fn test_probability_formula() {
        let candidates = vec![
            candidate(StrategyLabel::Encoding, 0.4),
            candidate(StrategyLabel::Encoding, 0.2),
        ];
        // 0.3 * 0.7 + 0.1 * 0.3 + 0.1
        let p = success_probability(&candidates, 0.1, FilterStrength::Strong);
        assert!((p - 0.34).abs() < 1e-9);
    }

    #[test]
    fn test_probability_capped() {
        let candidates = vec![
            candidate(StrategyLabel::Bias, 0.9),
            candidate(StrategyLabel::Roleplay, 0.9),
            candidate(StrategyLabel::Semantic, 0.9),
            candidate(StrategyLabel::Multistep, 0.9),
        ];
        assert_eq!(success_probability(&candidates, 1.0, FilterStrength::Weak), 0.95);
    }
}
