use crate::error::{ProbeforgeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Closed set of generation strategies a request may ask for.
///
/// The declaration order is the canonical iteration order used by the
/// orchestrator, so a `BTreeSet<StrategyId>` always iterates canonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyId {
    #[serde(alias = "cognitive_bias")]
    Bias,
    Roleplay,
    #[serde(alias = "token_smuggling")]
    Encoding,
    Semantic,
    Genetic,
    #[serde(alias = "multi_step")]
    Multistep,
}

impl StrategyId {
    pub const ALL: [StrategyId; 6] = [
        StrategyId::Bias,
        StrategyId::Roleplay,
        StrategyId::Encoding,
        StrategyId::Semantic,
        StrategyId::Genetic,
        StrategyId::Multistep,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StrategyId::Bias => "bias",
            StrategyId::Roleplay => "roleplay",
            StrategyId::Encoding => "encoding",
            StrategyId::Semantic => "semantic",
            StrategyId::Genetic => "genetic",
            StrategyId::Multistep => "multistep",
        }
    }

    /// Descriptive listing of every strategy, in canonical order.
    pub fn catalog() -> Vec<StrategyInfo> {
        Self::ALL.iter().map(|id| id.info()).collect()
    }

    pub fn info(&self) -> StrategyInfo {
        let (description, effectiveness, complexity) = match self {
            StrategyId::Bias => (
                "Frames the objective behind a persuasion cue (authority, social proof, urgency, reciprocity)",
                Rating::High,
                Rating::Medium,
            ),
            StrategyId::Roleplay => (
                "Embeds the objective in a fictional or professional scenario",
                Rating::High,
                Rating::Low,
            ),
            StrategyId::Encoding => (
                "Transforms the objective with a text encoding plus a decode instruction",
                Rating::Medium,
                Rating::Medium,
            ),
            StrategyId::Semantic => (
                "Re-frames the objective with contextual, emotional, technical, urgency or authority phrasing",
                Rating::Medium,
                Rating::High,
            ),
            StrategyId::Genetic => (
                "Evolves the strongest candidate with a word-level genetic optimizer",
                Rating::High,
                Rating::High,
            ),
            StrategyId::Multistep => (
                "Spreads the objective over a staged multi-turn conversation",
                Rating::VeryHigh,
                Rating::High,
            ),
        };

        StrategyInfo {
            id: *self,
            description: description.to_string(),
            effectiveness,
            complexity,
        }
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyId {
    type Err = ProbeforgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bias" | "cognitive_bias" => Ok(StrategyId::Bias),
            "roleplay" => Ok(StrategyId::Roleplay),
            "encoding" | "token_smuggling" => Ok(StrategyId::Encoding),
            "semantic" => Ok(StrategyId::Semantic),
            "genetic" => Ok(StrategyId::Genetic),
            "multistep" | "multi_step" => Ok(StrategyId::Multistep),
            other => Err(ProbeforgeError::InvalidArgument(format!(
                "unknown strategy '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Low,
    Medium,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyInfo {
    pub id: StrategyId,
    pub description: String,
    pub effectiveness: Rating,
    pub complexity: Rating,
}

/// Label attached to every produced candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyLabel {
    Bias,
    Roleplay,
    Encoding,
    Semantic,
    Optimized,
    Multistep,
}

impl StrategyLabel {
    pub fn for_strategy(id: StrategyId) -> Self {
        match id {
            StrategyId::Bias => StrategyLabel::Bias,
            StrategyId::Roleplay => StrategyLabel::Roleplay,
            StrategyId::Encoding => StrategyLabel::Encoding,
            StrategyId::Semantic => StrategyLabel::Semantic,
            StrategyId::Genetic => StrategyLabel::Optimized,
            StrategyId::Multistep => StrategyLabel::Multistep,
        }
    }
}

/// Assumed robustness of the target's filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterStrength {
    Weak,
    #[default]
    Medium,
    Strong,
}

impl FilterStrength {
    pub fn multiplier(&self) -> f64 {
        match self {
            FilterStrength::Weak => 1.2,
            FilterStrength::Medium => 1.0,
            FilterStrength::Strong => 0.7,
        }
    }
}

impl FromStr for FilterStrength {
    type Err = ProbeforgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weak" => Ok(FilterStrength::Weak),
            "medium" => Ok(FilterStrength::Medium),
            "strong" => Ok(FilterStrength::Strong),
            other => Err(ProbeforgeError::InvalidArgument(format!(
                "unknown filter strength '{}'",
                other
            ))),
        }
    }
}

/// Raw provider output, before the orchestrator attaches a confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub text: String,
    pub technique: String,
    pub description: String,
}

impl Variant {
    pub fn new(text: String, technique: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            text,
            technique: technique.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub text: String,
    pub strategy: StrategyLabel,
    pub technique: String,
    pub description: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub target: String,
    pub strategies: BTreeSet<StrategyId>,
    pub creativity: f64,
    pub max_results: i64,
    #[serde(default)]
    pub filter_strength: FilterStrength,
    #[serde(default = "default_model_type")]
    pub model_type: String,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_model_type() -> String {
    "general".to_string()
}

impl GenerationRequest {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            strategies: [StrategyId::Roleplay, StrategyId::Bias, StrategyId::Encoding]
                .into_iter()
                .collect(),
            creativity: 0.8,
            max_results: 5,
            filter_strength: FilterStrength::Medium,
            model_type: default_model_type(),
            seed: None,
        }
    }

    pub fn with_strategies<I: IntoIterator<Item = StrategyId>>(mut self, strategies: I) -> Self {
        self.strategies = strategies.into_iter().collect();
        self
    }

    /// Parses strategy names, rejecting anything outside the closed set.
    pub fn with_strategy_names<S: AsRef<str>>(self, names: &[S]) -> Result<Self> {
        let parsed = names
            .iter()
            .map(|n| n.as_ref().parse::<StrategyId>())
            .collect::<Result<Vec<_>>>()?;
        Ok(self.with_strategies(parsed))
    }

    pub fn with_creativity(mut self, creativity: f64) -> Self {
        self.creativity = creativity;
        self
    }

    pub fn with_max_results(mut self, max_results: i64) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_filter_strength(mut self, filter_strength: FilterStrength) -> Self {
        self.filter_strength = filter_strength;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_results <= 0 {
            return Err(ProbeforgeError::InvalidArgument(format!(
                "max_results must be positive, got {}",
                self.max_results
            )));
        }
        if !(0.0..=1.0).contains(&self.creativity) {
            return Err(ProbeforgeError::InvalidArgument(format!(
                "creativity must be within [0, 1], got {}",
                self.creativity
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderFailure {
    pub strategy: StrategyId,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationMetadata {
    pub timestamp: String,
    pub model_type: String,
    pub creativity: f64,
    pub filter_strength: FilterStrength,
    pub total_generated: usize,
    pub result_count: usize,
    pub provider_failures: Vec<ProviderFailure>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub candidates: Vec<Candidate>,
    pub success_probability: f64,
    pub strategies_used: Vec<StrategyId>,
    pub metadata: GenerationMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_aliases_parse() {
        assert_eq!("cognitive_bias".parse::<StrategyId>().unwrap(), StrategyId::Bias);
        assert_eq!("token_smuggling".parse::<StrategyId>().unwrap(), StrategyId::Encoding);
        assert_eq!("multi_step".parse::<StrategyId>().unwrap(), StrategyId::Multistep);
        assert_eq!("Genetic".parse::<StrategyId>().unwrap(), StrategyId::Genetic);
    }

    #[test]
    fn test_strategy_aliases_deserialize() {
        let ids: Vec<StrategyId> =
            serde_json::from_str(r#"["cognitive_bias", "token_smuggling", "multi_step", "roleplay"]"#).unwrap();
        assert_eq!(
            ids,
            vec![StrategyId::Bias, StrategyId::Encoding, StrategyId::Multistep, StrategyId::Roleplay]
        );
        assert_eq!(serde_json::to_string(&StrategyId::Bias).unwrap(), r#""bias""#);
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let err = "telepathy".parse::<StrategyId>().unwrap_err();
        assert!(matches!(err, ProbeforgeError::InvalidArgument(_)));
    }

    #[test]
    fn test_strategy_set_iterates_canonically() {
        let request = GenerationRequest::new("x").with_strategies([
            StrategyId::Multistep,
            StrategyId::Encoding,
            StrategyId::Bias,
        ]);
        let order: Vec<_> = request.strategies.iter().copied().collect();
        assert_eq!(order, vec![StrategyId::Bias, StrategyId::Encoding, StrategyId::Multistep]);
    }

    #[test]
    fn test_request_validation() {
        assert!(GenerationRequest::new("x").validate().is_ok());
        assert!(GenerationRequest::new("x").with_max_results(0).validate().is_err());
        assert!(GenerationRequest::new("x").with_creativity(1.5).validate().is_err());
        assert!(GenerationRequest::new("x").with_creativity(-0.1).validate().is_err());
        assert!(GenerationRequest::new("x").with_creativity(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_catalog_covers_all_strategies() {
        let catalog = StrategyId::catalog();
        assert_eq!(catalog.len(), StrategyId::ALL.len());
        assert_eq!(catalog[0].id, StrategyId::Bias);
    }
}
