pub mod config;
pub mod core;
pub mod dictionary;
pub mod engine;
pub mod ngram;
pub mod session;

pub use crate::core::fuzzy::generate_variants;
pub use dictionary::{DictionaryStore, LoadError, LoadReport};
pub use engine::Engine;
pub use session::{Composer, Key, KeyOutcome};
