use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use probeforge::similarity::{null_model, SharedSimilarityModel, TokenOverlapModel};
use probeforge::{ConfigManager, FilterStrength, GenerationRequest, Orchestrator, StrategyId};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "probeforge", version, about = "Prompt variant generator for guardrail red-teaming")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate candidate variants and print them as JSON
    Generate {
        target: String,

        /// Strategy names, comma separated
        #[arg(long, value_delimiter = ',', default_value = "roleplay,bias,encoding")]
        strategies: Vec<String>,

        #[arg(long, default_value_t = 0.8)]
        creativity: f64,

        #[arg(long, default_value_t = 5)]
        max_results: i64,

        #[arg(long, default_value = "medium")]
        filter_strength: String,

        #[arg(long, default_value = "general")]
        model_type: String,

        #[arg(long)]
        seed: Option<u64>,

        /// Rank semantic variants with the built-in token-overlap model
        #[arg(long)]
        similarity: bool,
    },
    /// List the available strategies
    Strategies,
    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let manager = ConfigManager::load(cli.config.as_deref()).context("loading configuration")?;

    match cli.command {
        Commands::Generate {
            target,
            strategies,
            creativity,
            max_results,
            filter_strength,
            model_type,
            seed,
            similarity,
        } => {
            let model: SharedSimilarityModel = if similarity {
                Arc::new(TokenOverlapModel)
            } else {
                log::warn!("No similarity model configured, semantic variants use fallback prefixes");
                null_model()
            };

            let mut request = GenerationRequest::new(target)
                .with_strategy_names(&strategies[..])?
                .with_creativity(creativity)
                .with_max_results(max_results)
                .with_filter_strength(filter_strength.parse::<FilterStrength>()?);
            request.model_type = model_type;
            if let Some(seed) = seed {
                request = request.with_seed(seed);
            }

            let orchestrator = Orchestrator::new(manager.get().clone(), model)?;
            let result = orchestrator.generate(&request)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Strategies => {
            println!("{}", serde_json::to_string_pretty(&StrategyId::catalog())?);
        }
        Commands::Config => {
            print!("{}", manager.to_toml()?);
        }
    }

    Ok(())
}
