//! 후보 결정 파이프라인
//!
//! 한 번의 호출 동안 불변 스냅샷만 읽는 상태 없는 처리입니다:
//! 1. 전체 입력 정확 일치
//! 2. 전체 입력의 퍼지 변형 일치 (모든 일치 변형의 합집합)
//! 3. 최장 일치 분절 + N-gram 순위
//! 4. 모두 실패하면 빈 목록

use std::collections::HashSet;

use crate::core::{generate_variants, Segmenter};
use crate::dictionary::DictionaryStore;
use crate::ngram::{CandidateRanker, RankingConfig};

/// 로마자 입력에 대한 태국어 후보 목록
///
/// 대소문자를 구분하지 않습니다. 후보가 없으면 빈 목록을 돌려주며
/// 이는 에러가 아닌 정상 결과입니다.
pub fn resolve_candidates(
    store: &DictionaryStore,
    config: &RankingConfig,
    input: &str,
) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }

    let lookup = input.to_lowercase();

    // 1단계: 정확 일치는 사전 순서 그대로
    if let Some(words) = store.dictionary().get(&lookup) {
        return words.to_vec();
    }

    // 2단계: 퍼지 변형 합집합 (처음 본 순서 유지)
    let fuzzy = union_variant_candidates(store, &lookup);
    if !fuzzy.is_empty() {
        return fuzzy;
    }

    // 3단계: 다단어 분절
    if let Some(segments) = Segmenter::new(store.dictionary()).segment(&lookup) {
        let mut phrases =
            CandidateRanker::new(store, config).generate_multi_word_candidates(&segments);
        if !phrases.is_empty() {
            phrases.truncate(config.max_results);
            return phrases;
        }
    }

    Vec::new()
}

/// 일치하는 모든 변형의 후보를 중복 없이 합침
fn union_variant_candidates(store: &DictionaryStore, lookup: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for variant in generate_variants(lookup).iter() {
        for word in store.lookup(variant) {
            if seen.insert(word.as_str()) {
                candidates.push(word.clone());
            }
        }
    }

    candidates
}
