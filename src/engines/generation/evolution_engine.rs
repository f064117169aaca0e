use crate::config::{ConfigSection, OptimizerConfig};
use crate::engines::evaluation::FitnessEvaluator;
use crate::engines::generation::operators::{mutate, recombine, select_population};
use crate::error::Result;
use crate::providers::SemanticProvider;
use crate::similarity::SharedSimilarityModel;
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize, population_size: usize);
    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedText {
    pub text: String,
    pub fitness: f64,
}

/// Word-level genetic optimizer over candidate texts.
///
/// A run seeds a population of `population_size` texts from one seed text,
/// then for each generation evaluates, tournament-selects, recombines and
/// mutates. The population size never changes within a run. Every random
/// draw comes from the caller's generator.
pub struct EvolutionEngine {
    config: OptimizerConfig,
    evaluator: FitnessEvaluator,
    seeder: SemanticProvider,
}

impl EvolutionEngine {
    /// Rejects a configuration that fails `OptimizerConfig::validate`.
    pub fn new(config: OptimizerConfig, model: SharedSimilarityModel) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            evaluator: FitnessEvaluator::new(),
            seeder: SemanticProvider::new(model),
        })
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Run the evolution process and return the top texts, best first.
    ///
    /// An empty seed yields an empty result.
    pub fn run<R: Rng + ?Sized, C: ProgressCallback>(
        &self,
        seed: &str,
        target: &str,
        rng: &mut R,
        callback: &mut C,
    ) -> Vec<RankedText> {
        if seed.trim().is_empty() {
            log::debug!("Empty seed text, skipping optimization");
            return Vec::new();
        }

        let started = Instant::now();
        let deadline = self.config.deadline();
        let mut population = self.initialize_population(seed, rng);

        for generation in 0..self.config.generations {
            if let Some(limit) = deadline {
                if started.elapsed() >= limit {
                    log::warn!(
                        "Optimizer deadline of {:?} reached after {} of {} generations",
                        limit,
                        generation,
                        self.config.generations
                    );
                    break;
                }
            }

            callback.on_generation_start(generation, population.len());

            let fitness = self.evaluate_population(&population, target);
            let best_fitness = fitness.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            callback.on_generation_complete(generation, best_fitness);

            population = self.create_next_generation(&population, &fitness, rng);
        }

        let fitness = self.evaluate_population(&population, target);
        rank(population, fitness, self.config.top_k)
    }

    /// Texts only, best first.
    pub fn evolve<R: Rng + ?Sized, C: ProgressCallback>(
        &self,
        seed: &str,
        target: &str,
        rng: &mut R,
        callback: &mut C,
    ) -> Vec<String> {
        self.run(seed, target, rng, callback)
            .into_iter()
            .map(|ranked| ranked.text)
            .collect()
    }

    /// Seed text first, then re-framed variants of it. Short variant lists
    /// are padded with the seed so the size is always `population_size`.
    pub fn initialize_population<R: Rng + ?Sized>(&self, seed: &str, rng: &mut R) -> Vec<String> {
        let size = self.config.population_size;
        let mut population = Vec::with_capacity(size);
        population.push(seed.to_string());
        population.extend(
            self.seeder
                .reframe(seed, size.saturating_sub(1), rng)
                .into_iter()
                .map(|(text, _)| text),
        );
        population.resize(size, seed.to_string());
        population
    }

    fn evaluate_population(&self, population: &[String], target: &str) -> Vec<f64> {
        population
            .par_iter()
            .map(|text| self.evaluator.score(text, target))
            .collect()
    }

    fn create_next_generation<R: Rng + ?Sized>(
        &self,
        population: &[String],
        fitness: &[f64],
        rng: &mut R,
    ) -> Vec<String> {
        let selected = select_population(
            population,
            fitness,
            self.config.tournament_size,
            population.len(),
            rng,
        );

        recombine(&selected, self.config.crossover_rate, rng)
            .into_iter()
            .map(|child| {
                if rng.gen::<f64>() < self.config.mutation_rate {
                    mutate(&child, self.config.word_mutation_rate, rng)
                } else {
                    child
                }
            })
            .collect()
    }
}

/// Stable descending sort: equal fitness keeps population order.
fn rank(population: Vec<String>, fitness: Vec<f64>, top_k: usize) -> Vec<RankedText> {
    let mut ranked: Vec<RankedText> = population
        .into_iter()
        .zip(fitness)
        .map(|(text, fitness)| RankedText { text, fitness })
        .collect();
    ranked.sort_by(|a, b| b.fitness.partial_cmp(&a.fitness).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(top_k);
    ranked
}
