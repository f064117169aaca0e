use crate::error::Result;
use crate::types::{StrategyId, Variant};
use rand::RngCore;

/// A stateless source of text variants for one strategy.
///
/// Implementations are pure functions of `(target, count)` plus the supplied
/// randomness source; they never touch global state.
pub trait VariantProvider: Send + Sync {
    /// Strategy this provider answers for
    fn strategy(&self) -> StrategyId;

    /// Produce up to `count` variants of `target`
    fn generate(&self, target: &str, count: usize, rng: &mut dyn RngCore) -> Result<Vec<Variant>>;
}
