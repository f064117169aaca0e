use super::{
    bias::BiasProvider,
    encoding::{EncodingMethod, EncodingProvider},
    multistep::MultistepProvider,
    roleplay::RoleplayProvider,
    semantic::SemanticProvider,
    traits::VariantProvider,
};
use crate::similarity::SharedSimilarityModel;
use crate::types::StrategyId;
use std::{collections::HashMap, sync::Arc};

pub struct ProviderRegistry {
    providers: HashMap<StrategyId, Arc<dyn VariantProvider>>,
}

impl ProviderRegistry {
    /// Registry with every built-in provider. `encoding_method` pins the
    /// encoding provider to one transform.
    pub fn new(model: SharedSimilarityModel, encoding_method: Option<EncodingMethod>) -> Self {
        let encoding = match encoding_method {
            Some(method) => EncodingProvider::with_method(method),
            None => EncodingProvider::new(),
        };
        let providers: Vec<Arc<dyn VariantProvider>> = vec![
            Arc::new(BiasProvider::new()),
            Arc::new(RoleplayProvider::new()),
            Arc::new(encoding),
            Arc::new(SemanticProvider::new(model)),
            Arc::new(MultistepProvider::new()),
        ];

        let mut registry = Self {
            providers: HashMap::new(),
        };
        for provider in providers {
            registry.register(provider);
        }
        registry
    }

    /// Replaces any provider already registered for the same strategy.
    pub fn register(&mut self, provider: Arc<dyn VariantProvider>) {
        self.providers.insert(provider.strategy(), provider);
    }

    pub fn get(&self, strategy: StrategyId) -> Option<Arc<dyn VariantProvider>> {
        self.providers.get(&strategy).cloned()
    }
}
