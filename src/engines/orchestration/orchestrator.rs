use super::confidence::{success_probability, ConfidenceRange};
use crate::config::{AppConfig, OrchestratorConfig};
use crate::engines::generation::{EvolutionEngine, LogProgressCallback};
use crate::error::{ProbeforgeError, Result};
use crate::providers::ProviderRegistry;
use crate::similarity::SharedSimilarityModel;
use crate::types::{
    Candidate, GenerationMetadata, GenerationRequest, GenerationResult, ProviderFailure,
    StrategyId, StrategyLabel, Variant,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Drives the providers for one request, merges their output, optionally
/// runs the optimizer and scores the aggregate.
///
/// Holds no per-request state; every call builds its own generator.
pub struct Orchestrator {
    config: OrchestratorConfig,
    registry: ProviderRegistry,
    optimizer: EvolutionEngine,
}

impl Orchestrator {
    /// Fails with `Configuration` when either config section is invalid.
    pub fn new(config: AppConfig, model: SharedSimilarityModel) -> Result<Self> {
        let registry = ProviderRegistry::new(model.clone(), config.orchestrator.encoding_method);
        Self::with_registry(config, registry, model)
    }

    pub fn with_registry(
        config: AppConfig,
        registry: ProviderRegistry,
        model: SharedSimilarityModel,
    ) -> Result<Self> {
        config.validate()?;
        let optimizer_config = config
            .optimizer
            .with_generations(config.orchestrator.optimizer_generations);

        Ok(Self {
            config: config.orchestrator,
            registry,
            optimizer: EvolutionEngine::new(optimizer_config, model)?,
        })
    }

    pub fn registry_mut(&mut self) -> &mut ProviderRegistry {
        &mut self.registry
    }

    /// Generate with a fresh generator seeded from the request, then the
    /// configured seed, then entropy.
    pub fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        let mut rng = match request.seed.or(self.config.seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.generate_with_rng(request, &mut rng)
    }

    pub fn generate_with_rng<R: Rng>(&self, request: &GenerationRequest, rng: &mut R) -> Result<GenerationResult> {
        request.validate()?;
        log::info!(
            "Generating variants for {:?} with strategies {:?}",
            request.target,
            request.strategies
        );

        let mut candidates: Vec<Candidate> = Vec::new();
        let mut strategies_used = Vec::new();
        let mut failures = Vec::new();
        let mut attempted = 0usize;

        for &strategy in &request.strategies {
            if strategy == StrategyId::Genetic {
                if candidates.is_empty() {
                    log::debug!("Skipping genetic pass: no candidates to seed from");
                    continue;
                }
                attempted += 1;
                let optimized = self.optimize(&candidates, &request.target, rng);
                candidates.extend(optimized);
                strategies_used.push(strategy);
                continue;
            }

            attempted += 1;
            match self.run_provider(strategy, &request.target, rng) {
                Ok(variants) => {
                    let label = StrategyLabel::for_strategy(strategy);
                    candidates.extend(variants.into_iter().map(|v| attach_confidence(v, label, rng)));
                    strategies_used.push(strategy);
                }
                Err(e) => {
                    log::warn!("{}", e);
                    failures.push(ProviderFailure {
                        strategy,
                        reason: e.to_string(),
                    });
                }
            }
        }

        if attempted > 0 && failures.len() == attempted {
            return Err(ProbeforgeError::TotalFailure { attempted });
        }

        let success_probability =
            success_probability(&candidates, request.creativity, request.filter_strength);
        let total_generated = candidates.len();

        // prefix slice in strategy order, not ranked by confidence
        candidates.truncate(usize::try_from(request.max_results).unwrap_or(usize::MAX));

        log::info!(
            "Generated {} candidates ({} kept), success probability {:.3}",
            total_generated,
            candidates.len(),
            success_probability
        );

        Ok(GenerationResult {
            metadata: GenerationMetadata {
                timestamp: chrono::Utc::now().to_rfc3339(),
                model_type: request.model_type.clone(),
                creativity: request.creativity,
                filter_strength: request.filter_strength,
                total_generated,
                result_count: candidates.len(),
                provider_failures: failures,
            },
            candidates,
            success_probability,
            strategies_used,
        })
    }

    fn run_provider<R: Rng>(&self, strategy: StrategyId, target: &str, rng: &mut R) -> Result<Vec<Variant>> {
        let provider = self.registry.get(strategy).ok_or_else(|| ProbeforgeError::Provider {
            strategy,
            reason: "no provider registered".to_string(),
        })?;

        provider
            .generate(target, self.config.count_for(strategy), rng)
            .map_err(|e| match e {
                ProbeforgeError::Provider { .. } => e,
                other => ProbeforgeError::Provider {
                    strategy,
                    reason: other.to_string(),
                },
            })
    }

    /// Evolve the most confident candidate (first on ties) and label the
    /// leading results as optimized.
    fn optimize<R: Rng>(&self, candidates: &[Candidate], target: &str, rng: &mut R) -> Vec<Candidate> {
        let Some(best) = candidates
            .iter()
            .reduce(|best, c| if c.confidence > best.confidence { c } else { best })
        else {
            return Vec::new();
        };

        let evolved = self
            .optimizer
            .evolve(&best.text, target, rng, &mut LogProgressCallback);

        evolved
            .into_iter()
            .take(self.config.optimized_count)
            .map(|text| {
                let variant = Variant::new(text, "genetic_optimization", "Genetically optimized prompt");
                attach_confidence(variant, StrategyLabel::Optimized, rng)
            })
            .collect()
    }
}

fn attach_confidence<R: Rng + ?Sized>(variant: Variant, label: StrategyLabel, rng: &mut R) -> Candidate {
    Candidate {
        text: variant.text,
        strategy: label,
        technique: variant.technique,
        description: variant.description,
        confidence: ConfidenceRange::for_label(label).draw(rng),
    }
}
