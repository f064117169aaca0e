use super::traits::VariantProvider;
use crate::data::templates::{semantic_base_prompt, FramingFamily, FALLBACK_PREFIXES, FRAMING_FAMILIES};
use crate::error::Result;
use crate::similarity::SharedSimilarityModel;
use crate::types::{StrategyId, Variant};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

pub struct SemanticProvider {
    model: SharedSimilarityModel,
}

impl SemanticProvider {
    pub fn new(model: SharedSimilarityModel) -> Self {
        Self { model }
    }

    /// Re-frame an arbitrary prompt `count` times.
    ///
    /// With a similarity model, families are cycled in order and the results
    /// are ordered by similarity to `prompt` (most similar first, stable).
    /// Without one, every variant takes a random fallback prefix.
    pub fn reframe<R: Rng + ?Sized>(&self, prompt: &str, count: usize, rng: &mut R) -> Vec<(String, &'static str)> {
        if !self.model.is_available() {
            return (0..count)
                .map(|_| {
                    let prefix = FALLBACK_PREFIXES.choose(rng).copied().unwrap_or_default();
                    (format!("{} {}", prefix, prompt), "fallback")
                })
                .collect();
        }

        let mut scored: Vec<(String, &'static str, f64)> = FRAMING_FAMILIES
            .iter()
            .cycle()
            .take(count)
            .map(|family| {
                let text = apply_family(family, prompt, rng);
                let score = self.model.similarity(&text, prompt).unwrap_or(0.0);
                (text, family.name, score)
            })
            .collect();

        scored.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().map(|(text, name, _)| (text, name)).collect()
    }
}

fn apply_family<R: Rng + ?Sized>(family: &FramingFamily, prompt: &str, rng: &mut R) -> String {
    let phrase = family.phrases.choose(rng).copied().unwrap_or_default();
    if family.comma_joined {
        format!("{}, {}", phrase, prompt)
    } else {
        format!("{} {}", phrase, prompt)
    }
}

impl VariantProvider for SemanticProvider {
    fn strategy(&self) -> StrategyId {
        StrategyId::Semantic
    }

    fn generate(&self, target: &str, count: usize, rng: &mut dyn RngCore) -> Result<Vec<Variant>> {
        let base = semantic_base_prompt(target);
        Ok(self
            .reframe(&base, count, rng)
            .into_iter()
            .map(|(text, family)| {
                Variant::new(
                    text,
                    format!("semantic_{}", family),
                    "Semantic variation of the base prompt",
                )
            })
            .collect())
    }
}
