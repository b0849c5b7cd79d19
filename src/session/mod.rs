//! 입력기용 조합 세션

mod composer;

pub use composer::{Composer, Key, KeyOutcome, DEFAULT_MAX_CANDIDATES};
