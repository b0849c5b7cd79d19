//! 최장 일치 분절기
//!
//! 사전 전체 일치가 없는 로마자 입력을 사전에 있는 단위로 나눕니다.
//! 앞에서부터 가장 긴 일치를 탐욕적으로 소비하며, 되돌아가지 않습니다.

use super::fuzzy::generate_variants;
use crate::dictionary::Dictionary;

/// 한 세그먼트의 최대 길이 (문자 수)
pub const MAX_WORD_LENGTH: usize = 15;

/// 사전 기반 탐욕적 분절기
#[derive(Debug, Clone, Copy)]
pub struct Segmenter<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> Segmenter<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    /// 입력을 세그먼트 목록으로 분절
    ///
    /// 세그먼트는 일치한 변형이 아니라 원본 입력 문자열 조각입니다.
    /// 어느 위치에서든 길이 1까지 일치가 없으면 전체가 실패(`None`)합니다.
    /// 빈 입력도 `None`입니다.
    pub fn segment(&self, input: &str) -> Option<Vec<String>> {
        let chars: Vec<char> = input.chars().collect();
        if chars.is_empty() {
            return None;
        }

        let mut segments = Vec::new();
        let mut pos = 0;

        while pos < chars.len() {
            let remaining = chars.len() - pos;
            let matched = (1..=remaining.min(MAX_WORD_LENGTH))
                .rev()
                .map(|len| chars[pos..pos + len].iter().collect::<String>())
                .find(|prefix| self.is_coverable(prefix))?;

            pos += matched.chars().count();
            segments.push(matched);
        }

        Some(segments)
    }

    /// 정확 일치 또는 퍼지 변형 일치 여부
    fn is_coverable(&self, prefix: &str) -> bool {
        self.dictionary.contains_key(prefix)
            || generate_variants(prefix)
                .iter()
                .any(|v| self.dictionary.contains_key(v))
    }

    /// 세그먼트 하나의 후보 조회
    ///
    /// 정확 일치가 우선이며, 없으면 변형을 생성 순서대로 확인해
    /// 처음 일치한 변형의 목록만 돌려줍니다 (변형 간 합집합이 아님).
    pub fn lookup_segment(&self, segment: &str) -> &'a [String] {
        let dictionary = self.dictionary;
        if let Some(words) = dictionary.get(segment) {
            return words;
        }

        generate_variants(segment)
            .iter()
            .find_map(|v| dictionary.get(v))
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dictionary() -> Dictionary {
        Dictionary::from_entries([
            ("pom", vec!["ผม"]),
            ("gin", vec!["กิน"]),
            ("kao", vec!["เข้า", "ข้าว"]),
            ("kaow", vec!["ข้าว"]),
            ("sawatdee", vec!["สวัสดี"]),
            ("krap", vec!["ครับ"]),
        ])
    }

    #[test]
    fn test_two_words() {
        let dict = sample_dictionary();
        let segmenter = Segmenter::new(&dict);
        assert_eq!(segmenter.segment("pomgin").unwrap(), ["pom", "gin"]);
    }

    #[test]
    fn test_longest_match_first() {
        let dict = sample_dictionary();
        let segmenter = Segmenter::new(&dict);
        // "kaow"가 "kao"보다 먼저 일치
        assert_eq!(segmenter.segment("kaowgin").unwrap(), ["kaow", "gin"]);
    }

    #[test]
    fn test_segment_keeps_original_spelling() {
        let dict = sample_dictionary();
        let segmenter = Segmenter::new(&dict);
        // "sawatdi"는 퍼지 변형 "sawatdee"로 일치하지만 원본을 보존
        assert_eq!(
            segmenter.segment("sawatdikrab").unwrap(),
            ["sawatdi", "krab"]
        );
    }

    #[test]
    fn test_no_backtracking_failure() {
        let dict = sample_dictionary();
        let segmenter = Segmenter::new(&dict);
        assert!(segmenter.segment("pomxq").is_none());
        assert!(segmenter.segment("").is_none());
    }

    #[test]
    fn test_lookup_segment_exact() {
        let dict = sample_dictionary();
        let segmenter = Segmenter::new(&dict);
        assert_eq!(segmenter.lookup_segment("kao"), ["เข้า", "ข้าว"]);
    }

    #[test]
    fn test_lookup_segment_fuzzy() {
        let dict = sample_dictionary();
        let segmenter = Segmenter::new(&dict);
        assert_eq!(segmenter.lookup_segment("krab"), ["ครับ"]);
        assert_eq!(segmenter.lookup_segment("sawatdi"), ["สวัสดี"]);
        assert!(segmenter.lookup_segment("xq").is_empty());
    }

    #[test]
    fn test_lookup_segment_first_variant_only() {
        // "sawatdi"의 변형 중 "sawatdee"(1번 규칙)가 "sawasdi"(3번 규칙)보다 먼저 생성됨
        let dict = Dictionary::from_entries([
            ("sawatdee", vec!["สวัสดี"]),
            ("sawasdi", vec!["ซาวาสดิ"]),
        ]);
        let segmenter = Segmenter::new(&dict);
        assert_eq!(segmenter.lookup_segment("sawatdi"), ["สวัสดี"]);
    }

    #[test]
    fn test_max_word_length() {
        let long_key = "a".repeat(MAX_WORD_LENGTH + 1);
        let dict = Dictionary::from_entries([(long_key.clone(), vec!["ยาว"])]);
        let segmenter = Segmenter::new(&dict);
        // 15자를 넘는 사전 키는 세그먼트로 일치할 수 없음
        assert!(segmenter.segment(&long_key).is_none());
    }
}
