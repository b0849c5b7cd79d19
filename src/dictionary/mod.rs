//! 로마자 사전과 불변 스냅샷

mod model;
mod store;

pub use model::{Dictionary, DictionaryError};
pub use store::{DictionaryStore, LoadError, LoadReport};
