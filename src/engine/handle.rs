//! 공유 엔진 핸들
//!
//! 로드된 스냅샷을 `Arc`로 공유하고, 재로드는 스냅샷 전체를 원자적으로 교체합니다.
//! 조회는 잠금을 스냅샷 복제 동안만 잡고, 파이프라인은 잠금 없이 실행됩니다.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::thread::{self, JoinHandle};

use super::pipeline::resolve_candidates;
use crate::dictionary::{DictionaryStore, LoadReport};
use crate::ngram::RankingConfig;

/// 태국어 후보 엔진
///
/// 여러 스레드에서 `Arc<Engine>`으로 공유해 동시에 조회할 수 있습니다.
/// 로드가 끝나기 전에는 빈 스냅샷을 사용하므로 조회가 막히지 않고 빈 목록을 돌려줍니다.
#[derive(Debug)]
pub struct Engine {
    store: RwLock<Arc<DictionaryStore>>,
    ranking: RankingConfig,
    /// 스냅샷이 한 번 이상 설치됨
    loaded: AtomicBool,
    /// 백그라운드 로드가 시작됨
    loading: AtomicBool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// 빈 스냅샷으로 엔진 생성 (로드 전 상태)
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Arc::new(DictionaryStore::empty())),
            ranking: RankingConfig::default(),
            loaded: AtomicBool::new(false),
            loading: AtomicBool::new(false),
        }
    }

    /// 이미 만들어진 스냅샷으로 엔진 생성
    pub fn with_store(store: DictionaryStore) -> Self {
        let engine = Self::new();
        engine.install(store);
        engine
    }

    /// 순위 설정 지정
    pub fn with_ranking(mut self, ranking: RankingConfig) -> Self {
        self.ranking = ranking;
        self
    }

    /// 현재 스냅샷
    pub fn snapshot(&self) -> Arc<DictionaryStore> {
        // 스냅샷은 통째로 교체되므로 poison 상태여도 내용은 일관됨
        let guard = self.store.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// 스냅샷 원자적 교체
    pub fn install(&self, store: DictionaryStore) {
        let store = Arc::new(store);
        {
            let mut guard = self.store.write().unwrap_or_else(|e| e.into_inner());
            *guard = store;
        }
        self.loaded.store(true, Ordering::Release);
    }

    /// 파일에서 동기적으로 로드하여 설치 (재로드 포함)
    pub fn reload_from_paths(
        &self,
        dictionary_path: impl Into<PathBuf>,
        ngram_path: impl Into<PathBuf>,
    ) -> LoadReport {
        let (store, report) = DictionaryStore::load(dictionary_path.into(), ngram_path.into());
        self.install(store);
        report
    }

    /// 백그라운드 스레드에서 로드 시작
    ///
    /// 이미 로드가 시작되었으면 아무것도 하지 않고 `None`을 돌려줍니다.
    /// 완료 전까지 [`Engine::get_candidates`]는 빈 목록을 돌려줍니다.
    pub fn load_in_background(
        self: &Arc<Self>,
        dictionary_path: impl Into<PathBuf>,
        ngram_path: impl Into<PathBuf>,
    ) -> Option<JoinHandle<LoadReport>> {
        if self.loading.swap(true, Ordering::AcqRel) {
            log::debug!("사전 로드가 이미 시작됨");
            return None;
        }

        let engine = Arc::clone(self);
        let dictionary_path = dictionary_path.into();
        let ngram_path = ngram_path.into();

        Some(thread::spawn(move || {
            let report = engine.reload_from_paths(dictionary_path, ngram_path);
            for e in &report.errors {
                log::warn!("로드 실패 (빈 테이블로 계속): {}", e);
            }
            report
        }))
    }

    /// 스냅샷이 설치되었는지
    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }

    /// 순위 설정
    pub fn ranking(&self) -> &RankingConfig {
        &self.ranking
    }

    /// 로마자 입력에 대한 태국어 후보 목록
    pub fn get_candidates(&self, input: &str) -> Vec<String> {
        let store = self.snapshot();
        resolve_candidates(&store, &self.ranking, input)
    }
}
