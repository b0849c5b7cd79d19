//! N-gram 빈도 기반 다단어 후보 순위
//!
//! 분절된 로마자 세그먼트마다 사전 후보를 찾고, 후보 조합을
//! 바이그램/트라이그램 빈도로 점수화하여 자연스러운 구를 고릅니다.
//!
//! # 사용 예시
//!
//! ```
//! use thai_phonetic::dictionary::{Dictionary, DictionaryStore};
//! use thai_phonetic::ngram::{CandidateRanker, NgramModel, RankingConfig};
//!
//! let ngrams = NgramModel::from_json(r#"{ "bigrams": { "ผม|กิน": 100 } }"#).unwrap();
//! let store = DictionaryStore::new(Dictionary::empty(), ngrams);
//! let config = RankingConfig::default();
//! let ranker = CandidateRanker::new(&store, &config);
//!
//! assert_eq!(ranker.score_phrase(&["ผม", "กิน"]), 100.0);
//! assert_eq!(ranker.score_phrase(&["ผม"]), 1000.0);
//! ```

mod config;
pub(crate) mod model;
mod ranker;

// 공개 인터페이스
pub use config::RankingConfig;
pub use model::{FrequencyTable, NgramError, NgramModel};
pub use ranker::{CandidateRanker, ScoredPhrase};
