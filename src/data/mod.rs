pub mod templates;
pub mod vocabulary;

pub use vocabulary::{synonyms_for, CREDIBILITY_MARKERS};
