//! N-gram 빈도 모델 로드
//!
//! JSON 형식의 N-gram 빈도 파일을 로드합니다.
//! 키는 태국어 단어를 `|`로 이어 붙인 문자열입니다.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// N-gram 모델 로드/파싱 에러
#[derive(Debug)]
pub enum NgramError {
    /// 파일 읽기 실패
    IoError(std::io::Error),
    /// JSON 파싱 실패
    ParseError(String),
    /// 모델 형식 오류
    FormatError(String),
}

impl std::fmt::Display for NgramError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NgramError::IoError(e) => write!(f, "파일 읽기 오류: {}", e),
            NgramError::ParseError(s) => write!(f, "JSON 파싱 오류: {}", s),
            NgramError::FormatError(s) => write!(f, "모델 형식 오류: {}", s),
        }
    }
}

impl std::error::Error for NgramError {}

impl From<std::io::Error> for NgramError {
    fn from(e: std::io::Error) -> Self {
        NgramError::IoError(e)
    }
}

/// 빈도 테이블: `"w1|w2"` 또는 `"w1|w2|w3"` -> 빈도
pub type FrequencyTable = HashMap<String, u64>;

/// N-gram 파일의 바이그램 필드명
pub const BIGRAMS_FIELD: &str = "bigrams";
/// N-gram 파일의 트라이그램 필드명
pub const TRIGRAMS_FIELD: &str = "trigrams";

/// N-gram 빈도 모델
///
/// 인접 단어 쌍(바이그램)과 세 단어(트라이그램)의 공기 빈도를 저장합니다.
#[derive(Debug, Clone, Default)]
pub struct NgramModel {
    bigrams: FrequencyTable,
    trigrams: FrequencyTable,
}

impl NgramModel {
    /// JSON 파일에서 N-gram 모델 로드
    ///
    /// # 파일 형식
    /// ```json
    /// {
    ///   "bigrams": { "ผม|กิน": 100, "กิน|ข้าว": 200 },
    ///   "trigrams": { "ผม|กิน|ข้าว": 50 }
    /// }
    /// ```
    ///
    /// 필드가 없으면 해당 테이블은 비어 있는 것으로 간주합니다.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NgramError> {
        let value = read_json_value(path)?;
        Self::from_json_value(&value)
    }

    /// JSON 문자열에서 모델 로드
    pub fn from_json(json_str: &str) -> Result<Self, NgramError> {
        let value: serde_json::Value = serde_json::from_str(json_str)
            .map_err(|e| NgramError::ParseError(e.to_string()))?;

        Self::from_json_value(&value)
    }

    /// serde_json::Value에서 모델 생성
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self, NgramError> {
        Ok(Self {
            bigrams: parse_table(value, BIGRAMS_FIELD, 2)?,
            trigrams: parse_table(value, TRIGRAMS_FIELD, 3)?,
        })
    }

    /// 이미 파싱된 테이블로 모델 생성
    pub fn from_tables(bigrams: FrequencyTable, trigrams: FrequencyTable) -> Self {
        Self { bigrams, trigrams }
    }

    /// 빈 모델 생성
    pub fn empty() -> Self {
        Self::default()
    }

    /// 바이그램 빈도 조회
    pub fn bigram(&self, first: &str, second: &str) -> Option<u64> {
        self.bigrams
            .get(&format!("{}|{}", first, second))
            .copied()
    }

    /// 트라이그램 빈도 조회
    pub fn trigram(&self, first: &str, second: &str, third: &str) -> Option<u64> {
        self.trigrams
            .get(&format!("{}|{}|{}", first, second, third))
            .copied()
    }

    /// 모델에 데이터가 있는지 확인
    pub fn is_empty(&self) -> bool {
        self.bigrams.is_empty() && self.trigrams.is_empty()
    }

    /// 바이그램 항목 수
    pub fn bigram_entries(&self) -> usize {
        self.bigrams.len()
    }

    /// 트라이그램 항목 수
    pub fn trigram_entries(&self) -> usize {
        self.trigrams.len()
    }
}

/// 파일을 읽어 JSON 값으로 파싱
pub(crate) fn read_json_value(path: impl AsRef<Path>) -> Result<serde_json::Value, NgramError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|e| NgramError::ParseError(e.to_string()))
}

/// 최상위 객체에서 `field` 빈도 테이블 파싱
///
/// 각 키는 정확히 `arity`개의 비어 있지 않은 단어로 이루어져야 합니다.
/// 키 형식이나 빈도값이 잘못된 항목은 경고 후 건너뜁니다.
/// 필드 자체가 객체가 아닐 때만 에러입니다.
pub(crate) fn parse_table(
    value: &serde_json::Value,
    field: &str,
    arity: usize,
) -> Result<FrequencyTable, NgramError> {
    let obj = match value.get(field) {
        None => return Ok(FrequencyTable::new()),
        Some(v) => v.as_object().ok_or_else(|| {
            NgramError::FormatError(format!("{} 필드가 객체가 아닙니다", field))
        })?,
    };

    let mut table = FrequencyTable::with_capacity(obj.len());

    for (key, val) in obj {
        let parts: Vec<&str> = key.split('|').collect();
        if parts.len() != arity || parts.iter().any(|p| p.is_empty()) {
            log::warn!("잘못된 {} 키 형식 건너뜀: {} (단어 {}개 필요)", field, key, arity);
            continue;
        }

        match val.as_u64() {
            Some(count) => {
                table.insert(key.clone(), count);
            }
            None => log::warn!("유효하지 않은 {} 빈도값 건너뜀: {} = {}", field, key, val),
        }
    }

    Ok(table)
}
