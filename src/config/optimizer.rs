use super::traits::{check_rate, ConfigSection};
use crate::error::ProbeforgeError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    pub population_size: usize,
    pub mutation_rate: f64,
    pub crossover_rate: f64,
    pub generations: usize,
    pub tournament_size: usize,
    /// Per-word replacement probability once an offspring is picked for mutation
    pub word_mutation_rate: f64,
    /// Number of ranked texts returned by a run
    pub top_k: usize,
    /// Wall-clock budget, checked between generations
    pub deadline_ms: Option<u64>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            mutation_rate: 0.1,
            crossover_rate: 0.7,
            generations: 5,
            tournament_size: 3,
            word_mutation_rate: 0.3,
            top_k: 5,
            deadline_ms: None,
        }
    }
}

impl OptimizerConfig {
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_ms.map(Duration::from_millis)
    }
}

impl ConfigSection for OptimizerConfig {
    fn section_name() -> &'static str {
        "optimizer"
    }

    fn validate(&self) -> Result<(), ProbeforgeError> {
        if self.population_size == 0 {
            return Err(ProbeforgeError::Configuration(
                "Population size must be positive".to_string(),
            ));
        }
        if self.tournament_size == 0 {
            return Err(ProbeforgeError::Configuration(
                "Tournament size must be positive".to_string(),
            ));
        }
        if self.top_k == 0 {
            return Err(ProbeforgeError::Configuration(
                "top_k must be positive".to_string(),
            ));
        }
        check_rate(Self::section_name(), "mutation_rate", self.mutation_rate)?;
        check_rate(Self::section_name(), "crossover_rate", self.crossover_rate)?;
        check_rate(Self::section_name(), "word_mutation_rate", self.word_mutation_rate)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = OptimizerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.population_size, 20);
        assert_eq!(config.deadline(), None);
    }

    #[test]
    fn test_rejects_out_of_range_rates() {
        let config = OptimizerConfig {
            crossover_rate: 1.2,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = OptimizerConfig {
            population_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
