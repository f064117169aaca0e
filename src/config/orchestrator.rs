use super::traits::ConfigSection;
use crate::error::ProbeforgeError;
use crate::providers::EncodingMethod;
use crate::types::StrategyId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    pub bias_count: usize,
    pub roleplay_count: usize,
    pub encoding_count: usize,
    pub semantic_count: usize,
    pub multistep_count: usize,
    /// Optimized texts appended by the genetic pass
    pub optimized_count: usize,
    /// Generations run by the genetic pass
    pub optimizer_generations: usize,
    pub encoding_method: Option<EncodingMethod>,
    /// Used when a request carries no seed of its own
    pub seed: Option<u64>,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            bias_count: 2,
            roleplay_count: 2,
            encoding_count: 1,
            semantic_count: 2,
            multistep_count: 1,
            optimized_count: 2,
            optimizer_generations: 3,
            encoding_method: None,
            seed: None,
        }
    }
}

impl OrchestratorConfig {
    pub fn count_for(&self, strategy: StrategyId) -> usize {
        match strategy {
            StrategyId::Bias => self.bias_count,
            StrategyId::Roleplay => self.roleplay_count,
            StrategyId::Encoding => self.encoding_count,
            StrategyId::Semantic => self.semantic_count,
            StrategyId::Genetic => self.optimized_count,
            StrategyId::Multistep => self.multistep_count,
        }
    }
}

impl ConfigSection for OrchestratorConfig {
    fn section_name() -> &'static str {
        "orchestrator"
    }

    fn validate(&self) -> Result<(), ProbeforgeError> {
        for id in StrategyId::ALL {
            if self.count_for(id) == 0 {
                return Err(ProbeforgeError::Configuration(format!(
                    "Variant count for '{}' must be positive",
                    id
                )));
            }
        }
        Ok(())
    }
}
