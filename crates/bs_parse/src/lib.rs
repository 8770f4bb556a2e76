pub mod parser;
pub mod types;
pub mod vocabulary;

// Re-export main types
pub use parser::parse_class;
pub use types::{ParsedClass, HOVER_STATE, STATE_SUFFIXES};
pub use vocabulary::{Stem, StemFlags, UtilityVocabulary};
