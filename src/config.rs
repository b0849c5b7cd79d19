//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 엔진 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EngineConfig {
    /// 로마자 사전 파일 경로
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: PathBuf,
    /// N-gram 빈도 파일 경로
    #[serde(default = "default_ngram_path")]
    pub ngram_path: PathBuf,
    /// 후보 표시 최대 개수 (로마자 원문 포함)
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
}

fn default_dictionary_path() -> PathBuf {
    PathBuf::from("dictionary.json")
}

fn default_ngram_path() -> PathBuf {
    PathBuf::from("ngram_frequencies.json")
}

fn default_max_candidates() -> usize {
    9
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dictionary_path: default_dictionary_path(),
            ngram_path: default_ngram_path(),
            max_candidates: default_max_candidates(),
        }
    }
}

/// 절대 경로인 환경 변수 값
fn absolute_env_dir(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/thai-phonetic/config.json (기본 ~/.config)
pub fn config_path() -> PathBuf {
    let base = absolute_env_dir("XDG_CONFIG_HOME")
        .or_else(|| absolute_env_dir("HOME").map(|home| home.join(".config")))
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    base.join("thai-phonetic").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> EngineConfig {
    load_config_from(&config_path())
}

fn load_config_from(path: &Path) -> EngineConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용: {}", e);
            EngineConfig::default()
        }),
        Err(_) => EngineConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &EngineConfig) -> Result<(), String> {
    save_config_to(&config_path(), config)
}

fn save_config_to(path: &Path, config: &EngineConfig) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패 ({}): {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.dictionary_path, PathBuf::from("dictionary.json"));
        assert_eq!(config.ngram_path, PathBuf::from("ngram_frequencies.json"));
        assert_eq!(config.max_candidates, 9);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = EngineConfig {
            dictionary_path: PathBuf::from("/opt/thai/dict.json"),
            ngram_path: PathBuf::from("/opt/thai/ngram.json"),
            max_candidates: 5,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.dictionary_path, PathBuf::from("/opt/thai/dict.json"));
        assert_eq!(parsed.max_candidates, 5);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let json = r#"{"max_candidates": 6}"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.max_candidates, 6);
        assert_eq!(config.dictionary_path, PathBuf::from("dictionary.json"));
    }

    #[test]
    fn test_config_path_file_name() {
        let path = config_path();
        assert!(path.ends_with("thai-phonetic/config.json"));
    }

    #[test]
    fn test_save_then_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = EngineConfig {
            dictionary_path: PathBuf::from("/srv/dict.json"),
            ngram_path: PathBuf::from("/srv/ngram.json"),
            max_candidates: 4,
        };

        save_config_to(&path, &config).unwrap();
        let loaded = load_config_from(&path);
        assert_eq!(loaded.dictionary_path, config.dictionary_path);
        assert_eq!(loaded.ngram_path, config.ngram_path);
        assert_eq!(loaded.max_candidates, 4);
    }

    #[test]
    fn test_broken_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(load_config_from(&path).max_candidates, 9);
        assert_eq!(load_config_from(&dir.path().join("missing.json")).max_candidates, 9);
    }

    #[test]
    fn test_save_config_under_xdg_config_home() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("XDG_CONFIG_HOME", dir.path());

        let config = EngineConfig {
            max_candidates: 7,
            ..EngineConfig::default()
        };
        save_config(&config).unwrap();

        assert!(dir.path().join("thai-phonetic").join("config.json").exists());
        assert_eq!(load_config().max_candidates, 7);
    }
}
