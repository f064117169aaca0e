pub mod operators;
pub mod evolution_engine;
pub mod progress;

pub use evolution_engine::{EvolutionEngine, ProgressCallback, RankedText};
pub use progress::{ChannelProgressCallback, LogProgressCallback, ProgressMessage};
