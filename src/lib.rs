//! Population-based generator of prompt variants for red-team evaluation of
//! LLM guardrails.
//!
//! [`Orchestrator`] runs the requested variant providers, optionally evolves
//! the strongest candidate with the word-level [`EvolutionEngine`], and returns
//! the merged candidates with an aggregate success estimate.

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod providers;
pub mod similarity;
pub mod types;

pub use config::{AppConfig, ConfigManager, OptimizerConfig, OrchestratorConfig};
pub use engines::evaluation::FitnessEvaluator;
pub use engines::generation::EvolutionEngine;
pub use engines::orchestration::Orchestrator;
pub use error::{ProbeforgeError, Result};
pub use types::{Candidate, FilterStrength, GenerationRequest, GenerationResult, StrategyId, StrategyLabel};
