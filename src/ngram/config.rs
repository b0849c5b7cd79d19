//! 다단어 후보 순위 설정
//!
//! 스코어링 및 조합 탐색에 사용되는 설정값 정의

/// 다단어 후보 순위 설정
#[derive(Debug, Clone)]
pub struct RankingConfig {
    /// 단어 하나짜리 구의 고정 점수
    pub single_word_score: f64,

    /// 바이그램 데이터가 없을 때 곱하는 감점 계수
    /// 0이 아니므로 조합이 완전히 제외되지는 않음
    pub missing_bigram_penalty: f64,

    /// 트라이그램 빈도에 곱하는 가중치
    /// 트라이그램은 드물기 때문에 더 크게 반영
    pub trigram_boost: f64,

    /// 위치(세그먼트)별로 조합에 사용할 상위 후보 수
    pub max_per_position: usize,

    /// 스코어링할 완성 조합의 최대 개수
    pub max_combinations: usize,

    /// 반환할 최대 구 개수
    pub max_results: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            single_word_score: 1000.0,
            missing_bigram_penalty: 0.01,
            trigram_boost: 10.0,
            max_per_position: 3,
            max_combinations: 50,
            max_results: 6,
        }
    }
}

impl RankingConfig {
    /// 새 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 바이그램 감점 계수 설정
    pub fn with_missing_bigram_penalty(mut self, penalty: f64) -> Self {
        self.missing_bigram_penalty = penalty;
        self
    }

    /// 트라이그램 가중치 설정
    pub fn with_trigram_boost(mut self, boost: f64) -> Self {
        self.trigram_boost = boost;
        self
    }

    /// 위치별 후보 수 설정
    pub fn with_max_per_position(mut self, n: usize) -> Self {
        self.max_per_position = n;
        self
    }

    /// 조합 상한 설정
    pub fn with_max_combinations(mut self, n: usize) -> Self {
        self.max_combinations = n;
        self
    }

    /// 결과 개수 설정
    pub fn with_max_results(mut self, n: usize) -> Self {
        self.max_results = n;
        self
    }
}
