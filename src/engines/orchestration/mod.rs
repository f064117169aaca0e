pub mod confidence;
pub mod orchestrator;

pub use confidence::{success_probability, ConfidenceRange};
pub use orchestrator::Orchestrator;
