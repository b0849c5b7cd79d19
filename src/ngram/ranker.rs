//! N-gram 빈도 기반 다단어 후보 순위
//!
//! 세그먼트별 후보 목록의 조합을 만들고, 인접 단어 빈도로 점수를 매겨
//! 상위 구(phrase)를 돌려줍니다.
//!
//! 조합 탐색은 `max_combinations`개를 채우면 즉시 멈춥니다.
//! 따라서 결과는 전체 조합 공간의 정확한 상위 K개가 아니라,
//! 탐색 순서상 먼저 생성된 조합들 중의 상위 K개입니다.

use super::config::RankingConfig;
use super::model::NgramModel;
use crate::core::Segmenter;
use crate::dictionary::DictionaryStore;

/// 점수가 매겨진 조합
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPhrase {
    /// 단어를 구분자 없이 이어 붙인 구
    pub phrase: String,
    /// 구성 단어
    pub words: Vec<String>,
    /// N-gram 점수 (높을수록 자연스러움)
    pub score: f64,
}

/// 다단어 후보 순위기
#[derive(Debug, Clone, Copy)]
pub struct CandidateRanker<'a> {
    store: &'a DictionaryStore,
    config: &'a RankingConfig,
}

impl<'a> CandidateRanker<'a> {
    pub fn new(store: &'a DictionaryStore, config: &'a RankingConfig) -> Self {
        Self { store, config }
    }

    fn ngrams(&self) -> &'a NgramModel {
        self.store.ngrams()
    }

    /// 단어 열의 N-gram 점수
    ///
    /// - 0개: 0.0
    /// - 1개: 고정 점수 (기본 1000.0)
    /// - 2개 이상: 1.0에서 시작해 인접 쌍마다 바이그램 빈도(없으면 감점 계수)를 곱하고,
    ///   트라이그램이 있으면 `빈도 × 가중치`를 추가로 곱함
    pub fn score_phrase<S: AsRef<str>>(&self, words: &[S]) -> f64 {
        match words.len() {
            0 => return 0.0,
            1 => return self.config.single_word_score,
            _ => {}
        }

        let ngrams = self.ngrams();
        let mut score = 1.0;

        for pair in words.windows(2) {
            match ngrams.bigram(pair[0].as_ref(), pair[1].as_ref()) {
                Some(freq) => score *= freq as f64,
                None => score *= self.config.missing_bigram_penalty,
            }
        }

        for triple in words.windows(3) {
            if let Some(freq) =
                ngrams.trigram(triple[0].as_ref(), triple[1].as_ref(), triple[2].as_ref())
            {
                score *= freq as f64 * self.config.trigram_boost;
            }
        }

        score
    }

    /// 세그먼트 목록에서 다단어 후보 생성 (최대 `max_results`개)
    ///
    /// 후보가 하나도 없는 세그먼트가 있으면 빈 목록을 돌려줍니다.
    /// 세그먼트가 하나뿐이면 점수 계산 없이 사전 순서대로 상위 후보를 돌려줍니다.
    pub fn generate_multi_word_candidates(&self, segments: &[String]) -> Vec<String> {
        let segmenter = Segmenter::new(self.store.dictionary());

        let mut candidate_sets: Vec<&[String]> = Vec::with_capacity(segments.len());
        for segment in segments {
            let candidates = segmenter.lookup_segment(segment);
            if candidates.is_empty() {
                return Vec::new();
            }
            candidate_sets.push(candidates);
        }

        match candidate_sets.as_slice() {
            [] => Vec::new(),
            [only] => only.iter().take(self.config.max_results).cloned().collect(),
            _ => {
                let ranked = self.rank_combinations(&candidate_sets);

                for (i, scored) in ranked.iter().take(self.config.max_results).enumerate() {
                    log::debug!(
                        "{}. {} [{}] score: {} ({})",
                        i + 1,
                        scored.phrase,
                        scored.words.join(" "),
                        scored.score,
                        segments.join("+")
                    );
                }

                ranked
                    .into_iter()
                    .take(self.config.max_results)
                    .map(|s| s.phrase)
                    .collect()
            }
        }
    }

    /// 후보 목록들의 조합을 만들어 점수 내림차순으로 정렬
    ///
    /// 점수가 같은 조합은 생성 순서를 유지합니다.
    pub fn rank_combinations(&self, candidate_sets: &[&[String]]) -> Vec<ScoredPhrase> {
        let mut scored: Vec<ScoredPhrase> = enumerate_combinations(
            candidate_sets,
            self.config.max_per_position,
            self.config.max_combinations,
        )
        .into_iter()
        .map(|words| {
            let score = self.score_phrase(words.as_slice());
            ScoredPhrase {
                phrase: words.concat(),
                words: words.into_iter().map(str::to_string).collect(),
                score,
            }
        })
        .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }
}

/// 위치별 상위 `per_position`개 후보의 곱집합을 깊이 우선 순서로 열거
///
/// 명시적인 인덱스 스택(마지막 위치가 가장 빨리 바뀜)으로 순회하며,
/// 완성 조합이 `cap`개에 도달하면 즉시 중단합니다.
fn enumerate_combinations<'s>(
    candidate_sets: &[&'s [String]],
    per_position: usize,
    cap: usize,
) -> Vec<Vec<&'s str>> {
    let widths: Vec<usize> = candidate_sets
        .iter()
        .map(|set| set.len().min(per_position))
        .collect();

    if candidate_sets.is_empty() || cap == 0 || widths.contains(&0) {
        return Vec::new();
    }

    let mut stack = vec![0usize; candidate_sets.len()];
    let mut combinations = Vec::new();

    loop {
        combinations.push(
            stack
                .iter()
                .zip(candidate_sets)
                .map(|(&i, &set)| set[i].as_str())
                .collect(),
        );
        if combinations.len() >= cap {
            break;
        }

        // 가장 깊은 위치부터 다음 후보로 진행, 소진된 위치는 되감기
        let mut depth = stack.len();
        loop {
            if depth == 0 {
                return combinations;
            }
            depth -= 1;
            stack[depth] += 1;
            if stack[depth] < widths[depth] {
                break;
            }
            stack[depth] = 0;
        }
    }

    combinations
}
