//! 사전 + N-gram 스냅샷
//!
//! 로드가 끝나면 변경되지 않는 읽기 전용 테이블 묶음입니다.
//! 로드는 테이블 단위로 실패를 허용합니다: 실패한 테이블만 비워 두고
//! 에러를 [`LoadReport`]로 돌려줍니다.

use std::path::Path;

use super::model::{Dictionary, DictionaryError};
use crate::ngram::model::{parse_table, read_json_value, BIGRAMS_FIELD, TRIGRAMS_FIELD};
use crate::ngram::{NgramError, NgramModel};

/// 테이블별 로드 실패
#[derive(Debug)]
pub enum LoadError {
    /// 사전 로드 실패
    Dictionary(DictionaryError),
    /// N-gram 파일 자체를 읽지 못함 (바이그램/트라이그램 모두 비어 있음)
    Ngrams(NgramError),
    /// 바이그램 테이블 형식 오류
    Bigrams(NgramError),
    /// 트라이그램 테이블 형식 오류
    Trigrams(NgramError),
}

impl LoadError {
    /// 실패한 테이블 이름
    pub fn table(&self) -> &'static str {
        match self {
            LoadError::Dictionary(_) => "dictionary",
            LoadError::Ngrams(_) => "ngrams",
            LoadError::Bigrams(_) => "bigrams",
            LoadError::Trigrams(_) => "trigrams",
        }
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cause: &dyn std::fmt::Display = match self {
            LoadError::Dictionary(e) => e,
            LoadError::Ngrams(e) | LoadError::Bigrams(e) | LoadError::Trigrams(e) => e,
        };
        write!(f, "[{}] {}", self.table(), cause)
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Dictionary(e) => Some(e),
            LoadError::Ngrams(e) | LoadError::Bigrams(e) | LoadError::Trigrams(e) => Some(e),
        }
    }
}

/// 로드 결과 요약
#[derive(Debug, Default)]
pub struct LoadReport {
    /// 사전 키 수
    pub dictionary_entries: usize,
    /// 바이그램 수
    pub bigrams: usize,
    /// 트라이그램 수
    pub trigrams: usize,
    /// 테이블별 실패 목록 (비어 있으면 전부 성공)
    pub errors: Vec<LoadError>,
}

impl LoadReport {
    /// 모든 테이블이 성공적으로 로드되었는지
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// 사전과 N-gram 테이블의 불변 스냅샷
#[derive(Debug, Clone, Default)]
pub struct DictionaryStore {
    dictionary: Dictionary,
    ngrams: NgramModel,
}

impl DictionaryStore {
    pub fn new(dictionary: Dictionary, ngrams: NgramModel) -> Self {
        Self { dictionary, ngrams }
    }

    /// 빈 스냅샷 (로드 전 상태)
    pub fn empty() -> Self {
        Self::default()
    }

    /// 사전 파일과 N-gram 파일에서 로드
    ///
    /// 실패해도 패닉하지 않으며, 실패한 테이블은 비어 있는 상태로 남습니다.
    pub fn load(
        dictionary_path: impl AsRef<Path>,
        ngram_path: impl AsRef<Path>,
    ) -> (Self, LoadReport) {
        Self::assemble(
            Dictionary::load(dictionary_path),
            read_json_value(ngram_path),
        )
    }

    /// JSON 문자열에서 로드
    pub fn from_json(dictionary_json: &str, ngram_json: &str) -> (Self, LoadReport) {
        let ngram_value = serde_json::from_str(ngram_json)
            .map_err(|e| NgramError::ParseError(e.to_string()));
        Self::assemble(Dictionary::from_json(dictionary_json), ngram_value)
    }

    fn assemble(
        dictionary: Result<Dictionary, DictionaryError>,
        ngram_value: Result<serde_json::Value, NgramError>,
    ) -> (Self, LoadReport) {
        let mut errors = Vec::new();

        let dictionary = dictionary.unwrap_or_else(|e| {
            log::error!("사전 로드 실패: {}", e);
            errors.push(LoadError::Dictionary(e));
            Dictionary::empty()
        });

        let ngrams = match ngram_value {
            Ok(value) => {
                let bigrams = parse_table(&value, BIGRAMS_FIELD, 2).unwrap_or_else(|e| {
                    log::error!("바이그램 로드 실패: {}", e);
                    errors.push(LoadError::Bigrams(e));
                    Default::default()
                });
                let trigrams = parse_table(&value, TRIGRAMS_FIELD, 3).unwrap_or_else(|e| {
                    log::error!("트라이그램 로드 실패: {}", e);
                    errors.push(LoadError::Trigrams(e));
                    Default::default()
                });
                NgramModel::from_tables(bigrams, trigrams)
            }
            Err(e) => {
                log::error!("N-gram 빈도 로드 실패: {}", e);
                errors.push(LoadError::Ngrams(e));
                NgramModel::empty()
            }
        };

        let store = Self::new(dictionary, ngrams);
        let report = LoadReport {
            dictionary_entries: store.dictionary.len(),
            bigrams: store.ngrams.bigram_entries(),
            trigrams: store.ngrams.trigram_entries(),
            errors,
        };

        log::info!(
            "사전 {}개, 바이그램 {}개, 트라이그램 {}개 로드",
            report.dictionary_entries,
            report.bigrams,
            report.trigrams
        );

        (store, report)
    }

    /// 정확히 일치하는 키의 단어 목록 (없으면 빈 슬라이스)
    pub fn lookup(&self, key: &str) -> &[String] {
        self.dictionary.lookup(key)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn ngrams(&self) -> &NgramModel {
        &self.ngrams
    }

    /// 사전이 비어 있는지 (로드 전이거나 사전 로드 실패)
    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }
}
