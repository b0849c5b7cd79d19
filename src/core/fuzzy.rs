//! 로마자 표기 퍼지 변형 생성기
//!
//! 사용자가 입력한 태국어 로마자 표기를 규칙 기반으로 확장하여
//! 사전에서 찾을 수 있는 대체 철자 집합을 만듭니다.
//!
//! 예: `sawatdi` → `sawatdee`, `sawasdi`, `sawaddi`, `sawadee` ...

use std::collections::HashSet;

/// 결과에 남길 변형의 최소 길이 (문자 수)
pub const MIN_VARIANT_LENGTH: usize = 2;

/// 생성 순서를 보존하는 변형 집합
///
/// 중복 없이 규칙이 적용된 순서대로 저장합니다.
/// 세그먼트 조회는 이 순서대로 첫 번째 일치 변형을 사용합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuzzyVariants {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl FuzzyVariants {
    fn with_original(roman: &str) -> Self {
        let mut variants = Self::default();
        variants.insert(roman.to_string());
        variants
    }

    fn insert(&mut self, variant: String) {
        if self.seen.insert(variant.clone()) {
            self.ordered.push(variant);
        }
    }

    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for variant in iter {
            self.insert(variant);
        }
    }

    fn retain_min_length(&mut self) {
        self.ordered.retain(|v| v.chars().count() >= MIN_VARIANT_LENGTH);
        self.seen.retain(|v| v.chars().count() >= MIN_VARIANT_LENGTH);
    }

    /// 변형 포함 여부
    pub fn contains(&self, variant: &str) -> bool {
        self.seen.contains(variant)
    }

    /// 생성 순서대로 순회
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

impl IntoIterator for FuzzyVariants {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.ordered.into_iter()
    }
}

/// 어말 `i` ↔ `ee` 교체 결과
fn final_vowel_swaps(word: &str) -> Vec<String> {
    let mut swapped = Vec::new();
    if let Some(stem) = word.strip_suffix('i') {
        swapped.push(format!("{}ee", stem));
    }
    if let Some(stem) = word.strip_suffix("ee") {
        swapped.push(format!("{}i", stem));
    }
    swapped
}

/// 장모음 표기 변형
///
/// 이중 모음이 있으면 모두 단모음으로 줄이고,
/// 없으면 첫 번째 단모음만 이중으로 늘립니다.
fn vowel_length_variant(roman: &str, single: &str, doubled: &str) -> Option<String> {
    if roman.contains(doubled) {
        Some(roman.replace(doubled, single))
    } else if roman.contains(single) {
        Some(roman.replacen(single, doubled, 1))
    } else {
        None
    }
}

/// 로마자 표기 하나를 퍼지 변형 집합으로 확장
///
/// 원본 문자열은 항상 첫 번째 원소입니다. 단, 최종 결과에서는
/// 길이 2 미만의 변형이 모두 제거되므로 1글자 원본은 남지 않습니다.
///
/// # Examples
/// ```
/// use thai_phonetic::core::generate_variants;
///
/// let variants = generate_variants("krab");
/// assert!(variants.contains("krab"));
/// assert!(variants.contains("krap"));
/// ```
pub fn generate_variants(roman: &str) -> FuzzyVariants {
    let mut variants = FuzzyVariants::with_original(roman);
    let len = roman.chars().count();

    // 1. 어말 i ↔ ee (sawatdi ↔ sawatdee)
    variants.extend(final_vowel_swaps(roman));

    // 2. 어말 y ↔ i ↔ ee (aroy, aroi, aroee)
    if let Some(stem) = roman.strip_suffix('y') {
        variants.insert(format!("{}i", stem));
        variants.insert(format!("{}ee", stem));
    }
    if len > 2 {
        if let Some(stem) = roman.strip_suffix('i') {
            variants.insert(format!("{}y", stem));
        }
    }
    if len > 3 {
        if let Some(stem) = roman.strip_suffix("ee") {
            variants.insert(format!("{}y", stem));
        }
    }

    // 3~4. 자음 전체 치환: t ↔ s, t ↔ d
    for (from, to) in [("t", "s"), ("s", "t"), ("t", "d"), ("d", "t")] {
        if roman.contains(from) {
            variants.insert(roman.replace(from, to));
        }
    }

    // 5. 장모음: aa ↔ a, oo ↔ o, ee ↔ e
    if let Some(v) = vowel_length_variant(roman, "a", "aa") {
        variants.insert(v);
    }
    if let Some(v) = vowel_length_variant(roman, "o", "oo") {
        variants.insert(v);
    }
    // 어말 ee는 1번 규칙이 처리
    if roman.contains("ee") {
        if !roman.ends_with("ee") {
            variants.insert(roman.replace("ee", "e"));
        }
    } else if roman.contains('e') {
        variants.insert(roman.replacen('e', "ee", 1));
    }

    // 6. 지금까지의 모든 변형에 어말 모음 교체를 한 번 더 적용
    let combined: Vec<String> = variants.iter().flat_map(final_vowel_swaps).collect();
    variants.extend(combined);

    // 7. 모음 앞 t 탈락 (sawatdi → sawadi, sawatdee → sawadee)
    if roman.contains("tdi") {
        variants.insert(roman.replace("tdi", "di"));
        variants.insert(roman.replace("tdi", "dee"));
    }
    if roman.contains("tdee") {
        variants.insert(roman.replace("tdee", "dee"));
        variants.insert(roman.replace("tdee", "di"));
    }
    if roman.contains("ti") && len > 3 {
        variants.insert(roman.replace("ti", "i"));
        variants.insert(roman.replace("ti", "ee"));
    }
    if roman.contains("tee") && len > 4 {
        variants.insert(roman.replace("tee", "ee"));
        variants.insert(roman.replace("tee", "i"));
    }

    // 8. 유성/무성 b ↔ p (krab ↔ krap, 위치 무관)
    if roman.contains('b') {
        variants.insert(roman.replace('b', "p"));
    }
    if roman.contains('p') {
        variants.insert(roman.replace('p', "b"));
    }

    variants.retain_min_length();
    variants
}
