use super::traits::VariantProvider;
use crate::data::templates::{
    multistep_direct, multistep_indirect, MULTISTEP_SETUP, STAGE_MARKER_FIRST, STAGE_MARKER_SECOND,
};
use crate::error::Result;
use crate::types::{StrategyId, Variant};
use rand::RngCore;

/// Setup, indirect follow-up and direct follow-up joined by stage markers.
pub struct MultistepProvider;

impl MultistepProvider {
    pub fn new() -> Self {
        Self
    }

    pub fn sequence(target: &str) -> String {
        format!(
            "{}\n\n{}\n\n{}\n\n{}\n\n{}",
            MULTISTEP_SETUP,
            STAGE_MARKER_FIRST,
            multistep_indirect(target),
            STAGE_MARKER_SECOND,
            multistep_direct(target)
        )
    }
}

impl Default for MultistepProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl VariantProvider for MultistepProvider {
    fn strategy(&self) -> StrategyId {
        StrategyId::Multistep
    }

    // Deterministic: the sequence draws nothing from `rng`.
    fn generate(&self, target: &str, count: usize, _rng: &mut dyn RngCore) -> Result<Vec<Variant>> {
        Ok((0..count)
            .map(|_| {
                Variant::new(
                    Self::sequence(target),
                    "multistep_sequence",
                    "Multi-step conversation sequence",
                )
            })
            .collect())
    }
}
