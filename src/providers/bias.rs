use super::traits::VariantProvider;
use crate::data::templates::{BiasCategory, BIAS_CATEGORIES};
use crate::error::Result;
use crate::types::{StrategyId, Variant};
use rand::seq::SliceRandom;
use rand::RngCore;

pub struct BiasProvider;

impl BiasProvider {
    pub fn new() -> Self {
        Self
    }

    /// Fill one template from `category` with the target.
    pub fn render<R: rand::Rng + ?Sized>(category: &BiasCategory, target: &str, rng: &mut R) -> String {
        let template = category.templates.choose(rng).copied().unwrap_or_default();
        format!("{} {}", template, target)
    }
}

impl Default for BiasProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl VariantProvider for BiasProvider {
    fn strategy(&self) -> StrategyId {
        StrategyId::Bias
    }

    fn generate(&self, target: &str, count: usize, rng: &mut dyn RngCore) -> Result<Vec<Variant>> {
        let mut variants = Vec::with_capacity(count);
        for _ in 0..count {
            let Some(category) = BIAS_CATEGORIES.choose(rng) else {
                break;
            };
            let text = Self::render(category, target, rng);
            variants.push(Variant::new(
                text,
                format!("bias_{}", category.name),
                format!("Frames the request with a {} cue", category.name.replace('_', " ")),
            ));
        }
        Ok(variants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bias_variants_end_with_target() {
        let mut rng = StdRng::seed_from_u64(7);
        let variants = BiasProvider::new().generate("the topic", 4, &mut rng).unwrap();
        assert_eq!(variants.len(), 4);
        for v in &variants {
            assert!(v.text.ends_with(" the topic"));
            assert!(v.technique.starts_with("bias_"));
            let category = v.technique.trim_start_matches("bias_");
            assert!(BIAS_CATEGORIES.iter().any(|c| c.name == category));
        }
    }

    #[test]
    fn test_zero_count_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(BiasProvider::new().generate("x", 0, &mut rng).unwrap().is_empty());
    }
}
