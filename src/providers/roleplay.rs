use super::traits::VariantProvider;
use crate::data::templates::{scenario_closing, Scenario, GENRES, SCENARIOS, TOPICS};
use crate::error::Result;
use crate::types::{StrategyId, Variant};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

pub struct RoleplayProvider;

impl RoleplayProvider {
    pub fn new() -> Self {
        Self
    }

    pub fn fill<R: Rng + ?Sized>(scenario: &Scenario, target: &str, rng: &mut R) -> String {
        let topic = TOPICS.choose(rng).copied().unwrap_or("human behavior");
        let genre = GENRES.choose(rng).copied().unwrap_or("drama");
        let setup = scenario
            .setup
            .replace("{topic}", topic)
            .replace("{genre}", genre)
            .replace("{target}", target);

        format!(
            "{}\n\n{}\n\n{}",
            setup,
            scenario.justification,
            scenario_closing(target)
        )
    }
}

impl Default for RoleplayProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl VariantProvider for RoleplayProvider {
    fn strategy(&self) -> StrategyId {
        StrategyId::Roleplay
    }

    fn generate(&self, target: &str, count: usize, rng: &mut dyn RngCore) -> Result<Vec<Variant>> {
        let mut variants = Vec::with_capacity(count);
        for _ in 0..count {
            let Some(scenario) = SCENARIOS.choose(rng) else {
                break;
            };
            variants.push(Variant::new(
                Self::fill(scenario, target, rng),
                format!("roleplay_{}", scenario.name),
                "Uses a fictional roleplay scenario",
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
    fn test_scenarios_end_with_closing_request() {
        let mut rng = StdRng::seed_from_u64(3);
        let variants = RoleplayProvider::new()
            .generate("lock picking", 10, &mut rng)
            .unwrap();
        assert_eq!(variants.len(), 10);
        for v in variants {
            assert!(v.text.ends_with("Please provide detailed information about lock picking."));
            assert!(!v.text.contains('{'), "unfilled placeholder in {:?}", v.text);
        }
    }

    #[test]
    fn test_target_with_braces_is_kept_verbatim() {
        let mut rng = StdRng::seed_from_u64(3);
        let variants = RoleplayProvider::new().generate("{topic}", 3, &mut rng).unwrap();
        for v in variants {
            assert!(v.text.ends_with("about {topic}."));
        }
    }
}
