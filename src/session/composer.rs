//! 조합 중인 로마자 입력 상태
//!
//! 입력기 프로토콜과 무관한 순수 상태 머신입니다.
//! 키 입력을 받아 버퍼와 후보 목록을 갱신하고, 확정할 텍스트를 돌려줍니다.

use std::sync::Arc;

use crate::engine::Engine;

/// 후보 표시 최대 개수 (로마자 원문 포함)
pub const DEFAULT_MAX_CANDIDATES: usize = 9;

/// 조합기에 전달하는 키
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// 문자 입력 (영문자 또는 후보 선택 숫자)
    Char(char),
    Backspace,
    /// 첫 번째 후보 확정
    Space,
    /// 로마자 원문 확정
    Enter,
    /// 조합 취소
    Escape,
}

/// 키 처리 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// 처리하지 않음 (호스트 앱으로 전달)
    Ignored,
    /// 버퍼/후보가 갱신됨
    Updated,
    /// 텍스트 확정 (조합 상태는 비워짐)
    Commit(String),
}

/// 로마자 조합기
#[derive(Debug)]
pub struct Composer {
    engine: Arc<Engine>,
    buffer: String,
    candidates: Vec<String>,
    max_candidates: usize,
}

impl Composer {
    pub fn new(engine: Arc<Engine>) -> Self {
        Self::with_max_candidates(engine, DEFAULT_MAX_CANDIDATES)
    }

    /// 후보 표시 개수 지정 (최소 1: 로마자 원문 자리)
    pub fn with_max_candidates(engine: Arc<Engine>, max_candidates: usize) -> Self {
        Self {
            engine,
            buffer: String::new(),
            candidates: Vec::new(),
            max_candidates: max_candidates.max(1),
        }
    }

    /// 입력 중인 로마자 (대소문자 보존)
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// 현재 후보 목록 (마지막은 항상 로마자 원문)
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn first_candidate(&self) -> Option<&str> {
        self.candidates.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn push_char(&mut self, c: char) {
        self.buffer.push(c);
        self.refresh();
    }

    pub fn push_str(&mut self, s: &str) {
        self.buffer.push_str(s);
        self.refresh();
    }

    /// 마지막 문자 삭제 (버퍼가 비어 있으면 false)
    pub fn backspace(&mut self) -> bool {
        if self.buffer.pop().is_none() {
            return false;
        }
        self.refresh();
        true
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.candidates.clear();
    }

    /// 키 하나 처리
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::Backspace => {
                if self.backspace() {
                    KeyOutcome::Updated
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Space => match self.first_candidate() {
                Some(first) => {
                    let text = first.to_string();
                    self.commit(text)
                }
                None if !self.buffer.is_empty() => {
                    let text = self.buffer.clone();
                    self.commit(text)
                }
                None => KeyOutcome::Ignored,
            },
            Key::Enter => {
                if self.buffer.is_empty() {
                    return KeyOutcome::Ignored;
                }
                let text = self.buffer.clone();
                self.commit(text)
            }
            Key::Escape => {
                if self.buffer.is_empty() {
                    return KeyOutcome::Ignored;
                }
                self.clear();
                KeyOutcome::Updated
            }
            Key::Char(c) => self.handle_char(c),
        }
    }

    fn handle_char(&mut self, c: char) -> KeyOutcome {
        // 숫자 키로 후보 선택 (1부터)
        if !self.buffer.is_empty() && !self.candidates.is_empty() {
            if let Some(n) = c.to_digit(10).filter(|n| (1..=9).contains(n)) {
                return match self.candidates.get(n as usize - 1) {
                    Some(candidate) => {
                        let text = candidate.clone();
                        self.commit(text)
                    }
                    None => KeyOutcome::Ignored,
                };
            }
        }

        if c.is_ascii_alphabetic() {
            self.push_char(c);
            return KeyOutcome::Updated;
        }

        KeyOutcome::Ignored
    }

    fn commit(&mut self, text: String) -> KeyOutcome {
        self.clear();
        KeyOutcome::Commit(text)
    }

    /// 후보 목록 재계산
    ///
    /// 엔진 후보를 `max_candidates - 1`개까지 두고, 마지막에 로마자 원문을 붙입니다.
    fn refresh(&mut self) {
        if self.buffer.is_empty() {
            self.candidates.clear();
            return;
        }

        let mut candidates = self.engine.get_candidates(&self.buffer);
        candidates.truncate(self.max_candidates - 1);
        candidates.push(self.buffer.clone());
        self.candidates = candidates;
    }
}
