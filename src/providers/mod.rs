pub mod traits;
pub mod registry;
pub mod bias;
pub mod encoding;
pub mod roleplay;
pub mod semantic;
pub mod multistep;

pub use traits::VariantProvider;
pub use registry::ProviderRegistry;
pub use encoding::EncodingMethod;
pub use semantic::SemanticProvider;
