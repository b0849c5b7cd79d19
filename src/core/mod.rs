//! 로마자 처리 핵심 로직: 퍼지 변형 생성과 최장 일치 분절

pub mod fuzzy;
pub mod segmenter;

pub use fuzzy::{generate_variants, FuzzyVariants};
pub use segmenter::{Segmenter, MAX_WORD_LENGTH};
