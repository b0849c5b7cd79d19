//! 태국어 후보 엔진
//!
//! 사전 조회, 퍼지 변형, 분절, N-gram 순위를 하나의 호출로 묶습니다.
//!
//! # 사용 예시
//!
//! ```
//! use thai_phonetic::dictionary::DictionaryStore;
//! use thai_phonetic::engine::Engine;
//!
//! let (store, report) = DictionaryStore::from_json(
//!     r#"{ "pom": ["ผม"], "gin": ["กิน"] }"#,
//!     r#"{ "bigrams": { "ผม|กิน": 100 }, "trigrams": {} }"#,
//! );
//! assert!(report.is_ok());
//!
//! let engine = Engine::with_store(store);
//! assert_eq!(engine.get_candidates("POM"), ["ผม"]);
//! assert_eq!(engine.get_candidates("pomgin"), ["ผมกิน"]);
//! assert!(engine.get_candidates("xyzabc").is_empty());
//! ```

mod handle;
mod pipeline;

pub use handle::Engine;
pub use pipeline::resolve_candidates;
