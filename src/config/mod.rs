pub mod traits;
pub mod optimizer;
pub mod orchestrator;
pub mod manager;

pub use manager::{AppConfig, ConfigManager};
pub use optimizer::OptimizerConfig;
pub use orchestrator::OrchestratorConfig;
pub use traits::ConfigSection;
