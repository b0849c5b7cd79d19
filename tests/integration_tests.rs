//! 통합 테스트 - 로마자 → 태국어 후보 파이프라인

use std::sync::Arc;

use proptest::prelude::*;
use thai_phonetic::dictionary::{Dictionary, DictionaryStore};
use thai_phonetic::ngram::{CandidateRanker, NgramModel, RankingConfig};
use thai_phonetic::{generate_variants, Composer, Engine, Key, KeyOutcome};

const DICTIONARY_JSON: &str = r#"{
    "pom": ["ผม"],
    "gin": ["กิน"],
    "kao": ["เข้า", "ข้าว"],
    "aroy": ["อร่อย"],
    "aroi": ["อร่อย"],
    "sawatdi": ["สวัสดี"],
    "sawatdee": ["สวัสดี"],
    "sawasdee": ["สวัสดี"],
    "krap": ["ครับ"]
}"#;

const NGRAM_JSON: &str = r#"{
    "bigrams": { "ผม|กิน": 100, "กิน|ข้าว": 200 },
    "trigrams": { "ผม|กิน|ข้าว": 50 }
}"#;

fn engine() -> Engine {
    let (store, report) = DictionaryStore::from_json(DICTIONARY_JSON, NGRAM_JSON);
    assert!(report.is_ok(), "테스트 데이터 로드 실패: {:?}", report.errors);
    Engine::with_store(store)
}

#[test]
fn test_exact_lookup() {
    let engine = engine();
    assert_eq!(engine.get_candidates("pom"), ["ผม"]);
    assert_eq!(engine.get_candidates("POM"), ["ผม"]);
    assert_eq!(engine.get_candidates("kao"), ["เข้า", "ข้าว"]);
}

#[test]
fn test_empty_input() {
    assert!(engine().get_candidates("").is_empty());
}

#[test]
fn test_no_match() {
    assert!(engine().get_candidates("xyzabc").is_empty());
}

#[test]
fn test_fuzzy_lookup() {
    let engine = engine();
    assert_eq!(engine.get_candidates("krab"), ["ครับ"]);
    assert_eq!(engine.get_candidates("sawasdi"), ["สวัสดี"]);
}

#[test]
fn test_multi_word_segmentation() {
    let engine = engine();
    let candidates = engine.get_candidates("pomgin");
    assert!(candidates.contains(&"ผมกิน".to_string()));
}

#[test]
fn test_multi_word_ranking_with_trigram() {
    let engine = engine();
    let candidates = engine.get_candidates("pomginkao");
    assert_eq!(candidates[0], "ผมกินข้าว");
    assert!(candidates.len() <= 6);
}

#[test]
fn test_multi_word_without_ngrams() {
    let dictionary = Dictionary::from_entries([("pom", vec!["ผม"]), ("gin", vec!["กิน"])]);
    let engine = Engine::with_store(DictionaryStore::new(dictionary, NgramModel::empty()));
    assert!(engine
        .get_candidates("pomgin")
        .contains(&"ผมกิน".to_string()));
}

#[test]
fn test_variant_reciprocity() {
    assert!(generate_variants("krab").contains("krap"));
    assert!(generate_variants("krap").contains("krab"));
    assert!(generate_variants("sat").contains("tat"));
    assert!(generate_variants("tat").contains("sas"));
    assert!(generate_variants("dam").contains("tam"));
    assert!(generate_variants("tam").contains("dam"));
}

#[test]
fn test_sawatdi_sawatdee_overlap() {
    let a = generate_variants("sawatdi");
    let b = generate_variants("sawatdee");
    assert!(a.iter().any(|v| b.contains(v)));
}

#[test]
fn test_score_phrase_properties() {
    let (store, _) = DictionaryStore::from_json("{}", r#"{ "bigrams": { "w1|w2": 42 } }"#);
    let config = RankingConfig::default();
    let ranker = CandidateRanker::new(&store, &config);

    assert_eq!(ranker.score_phrase(&["anyword"]), 1000.0);
    assert_eq!(ranker.score_phrase(&["w1", "w2"]), 42.0);
}

#[test]
fn test_result_and_combination_caps() {
    let words: Vec<String> = ["ก", "ข", "ค", "ง", "จ"].iter().map(|s| s.to_string()).collect();
    let dictionary = Dictionary::from_entries([("ka", words)]);
    let store = DictionaryStore::new(dictionary, NgramModel::empty());
    let config = RankingConfig::default();
    let ranker = CandidateRanker::new(&store, &config);

    let segments: Vec<String> = vec!["ka".to_string(); 5];
    let result = ranker.generate_multi_word_candidates(&segments);
    assert_eq!(result.len(), 6);

    let top = store.lookup("ka");
    let sets = vec![top; 5];
    assert_eq!(ranker.rank_combinations(&sets).len(), 50);
}

#[test]
fn test_soft_load_failure() {
    let (store, report) = DictionaryStore::from_json("{ not json", NGRAM_JSON);
    assert_eq!(report.errors.len(), 1);

    let engine = Engine::with_store(store);
    assert!(engine.get_candidates("pom").is_empty());
}

#[test]
fn test_composer_session() {
    let mut composer = Composer::new(Arc::new(engine()));

    for c in "Pom".chars() {
        assert_eq!(composer.handle_key(Key::Char(c)), KeyOutcome::Updated);
    }
    assert_eq!(composer.candidates(), ["ผม", "Pom"]);
    assert_eq!(
        composer.handle_key(Key::Space),
        KeyOutcome::Commit("ผม".to_string())
    );
    assert!(composer.is_empty());
}

proptest! {
    #[test]
    fn variants_contain_original_and_respect_min_length(roman in "[a-z]{2,12}") {
        let variants = generate_variants(&roman);
        prop_assert!(variants.contains(&roman));
        prop_assert!(variants.iter().all(|v| v.chars().count() >= 2));
    }

    #[test]
    fn short_original_is_filtered(roman in "[a-z]?") {
        let variants = generate_variants(&roman);
        prop_assert!(!variants.contains(&roman));
        prop_assert!(variants.iter().all(|v| v.chars().count() >= 2));
    }

    #[test]
    fn candidates_are_case_insensitive(input in "[a-zA-Z]{1,10}") {
        let engine = engine();
        prop_assert_eq!(
            engine.get_candidates(&input),
            engine.get_candidates(&input.to_lowercase())
        );
    }
}
