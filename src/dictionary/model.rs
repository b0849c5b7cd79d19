//! 로마자 → 태국어 단어 사전
//!
//! JSON 형식의 사전 파일을 로드합니다.
//! 각 항목의 단어 목록은 빈도순(가장 유력한 단어 먼저)으로 정렬되어 있다고 가정합니다.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// 사전 로드/파싱 에러
#[derive(Debug)]
pub enum DictionaryError {
    /// 파일 읽기 실패
    IoError(std::io::Error),
    /// JSON 파싱 실패
    ParseError(String),
}

impl std::fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictionaryError::IoError(e) => write!(f, "사전 파일 읽기 오류: {}", e),
            DictionaryError::ParseError(s) => write!(f, "사전 JSON 파싱 오류: {}", s),
        }
    }
}

impl std::error::Error for DictionaryError {}

impl From<std::io::Error> for DictionaryError {
    fn from(e: std::io::Error) -> Self {
        DictionaryError::IoError(e)
    }
}

/// 로마자 표기 → 태국어 단어 목록
///
/// 로드 후에는 변경되지 않습니다.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, Vec<String>>,
}

impl Dictionary {
    /// 빈 사전
    pub fn empty() -> Self {
        Self::default()
    }

    /// JSON 파일에서 사전 로드
    ///
    /// # 파일 형식
    /// ```json
    /// { "pom": ["ผม"], "kao": ["เข้า", "ข้าว"] }
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let raw: HashMap<String, Vec<String>> = serde_json::from_reader(reader)
            .map_err(|e| DictionaryError::ParseError(e.to_string()))?;

        Ok(Self::from_raw(raw))
    }

    /// JSON 문자열에서 사전 로드
    pub fn from_json(json_str: &str) -> Result<Self, DictionaryError> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json_str)
            .map_err(|e| DictionaryError::ParseError(e.to_string()))?;

        Ok(Self::from_raw(raw))
    }

    /// (키, 단어 목록) 쌍에서 사전 생성
    ///
    /// 단어 목록이 비어 있는 항목은 버립니다.
    pub fn from_entries<I, K, W>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<W>)>,
        K: Into<String>,
        W: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(key, words)| (key.into(), words.into_iter().map(Into::into).collect()))
            .filter(|(_, words): &(String, Vec<String>)| !words.is_empty())
            .collect();
        Self { entries }
    }

    /// 빈 키나 빈 단어 목록 항목은 건너뛰고 나머지만 사용
    fn from_raw(raw: HashMap<String, Vec<String>>) -> Self {
        let total = raw.len();
        let dictionary =
            Self::from_entries(raw.into_iter().filter(|(key, _)| !key.is_empty()));
        let dropped = total - dictionary.len();
        if dropped > 0 {
            log::warn!("빈 키 또는 빈 단어 목록 사전 항목 {}개 제외", dropped);
        }
        dictionary
    }

    /// 정확히 일치하는 키의 단어 목록 (없으면 빈 슬라이스)
    pub fn lookup(&self, key: &str) -> &[String] {
        self.get(key).unwrap_or(&[])
    }

    /// 정확히 일치하는 키의 단어 목록
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// 키 개수
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_dictionary_json() -> &'static str {
        r#"{
            "pom": ["ผม"],
            "gin": ["กิน"],
            "kao": ["เข้า", "ข้าว"],
            "empty": []
        }"#
    }

    #[test]
    fn test_load_from_json() {
        let dict = Dictionary::from_json(sample_dictionary_json()).unwrap();

        assert_eq!(dict.lookup("pom"), ["ผม"]);
        assert_eq!(dict.lookup("kao"), ["เข้า", "ข้าว"]);
        assert!(dict.lookup("xyz").is_empty()); // 없는 키
    }

    #[test]
    fn test_empty_word_list_dropped() {
        let dict = Dictionary::from_json(sample_dictionary_json()).unwrap();
        assert!(!dict.contains_key("empty"));
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn test_order_preserved() {
        let dict = Dictionary::from_entries([("kao", vec!["เข้า", "ข้าว", "ขาว"])]);
        assert_eq!(dict.lookup("kao")[0], "เข้า");
        assert_eq!(dict.lookup("kao")[2], "ขาว");
    }

    #[test]
    fn test_parse_error() {
        let result = Dictionary::from_json(r#"{ "pom": "ผม" }"#);
        assert!(matches!(result, Err(DictionaryError::ParseError(_))));

        let result = Dictionary::from_json("not json");
        assert!(matches!(result, Err(DictionaryError::ParseError(_))));
    }

    #[test]
    fn test_empty_key_skipped() {
        let dict = Dictionary::from_json(r#"{ "": ["x"], "pom": ["ผม"] }"#).unwrap();
        assert!(!dict.contains_key(""));
        assert_eq!(dict.lookup("pom"), ["ผม"]);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample_dictionary_json().as_bytes()).unwrap();

        let dict = Dictionary::load(file.path()).unwrap();
        assert_eq!(dict.lookup("gin"), ["กิน"]);
    }

    #[test]
    fn test_missing_file() {
        let result = Dictionary::load("/nonexistent/dictionary.json");
        assert!(matches!(result, Err(DictionaryError::IoError(_))));
    }
}
