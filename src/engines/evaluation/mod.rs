pub mod fitness;

pub use fitness::{FitnessComponents, FitnessEvaluator};
