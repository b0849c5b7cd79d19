//! thai-phonetic - 로마자 → 태국어 후보 조회 CLI
//!
//! ```bash
//! # 인자로 입력
//! thai-phonetic --dict dictionary.json --ngram ngram_frequencies.json sawatdee pomgin
//!
//! # 표준 입력에서 한 줄씩
//! echo krab | thai-phonetic
//!
//! # 사전 경로를 설정 파일에 저장
//! thai-phonetic --dict /opt/thai/dictionary.json --write-config
//! ```

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use thai_phonetic::config::{config_path, load_config, save_config, EngineConfig};
use thai_phonetic::Engine;

#[derive(Parser)]
#[command(name = "thai-phonetic")]
#[command(version)]
#[command(about = "Romanized Thai to Thai-script candidates")]
struct Cli {
    /// 로마자 사전 JSON 경로 (설정 파일 값 대신 사용)
    #[arg(long)]
    dict: Option<PathBuf>,

    /// N-gram 빈도 JSON 경로 (설정 파일 값 대신 사용)
    #[arg(long)]
    ngram: Option<PathBuf>,

    /// 인자가 반영된 현재 설정을 설정 파일에 저장
    #[arg(long)]
    write_config: bool,

    /// 조회할 로마자 입력 (없으면 표준 입력에서 한 줄씩 읽음)
    inputs: Vec<String>,
}

/// `입력<TAB>후보1 후보2 ...` 형식 (후보가 없으면 `-`)
fn format_line(input: &str, candidates: &[String], max_candidates: usize) -> String {
    if candidates.is_empty() {
        format!("{}\t-", input)
    } else {
        let shown = &candidates[..candidates.len().min(max_candidates)];
        format!("{}\t{}", input, shown.join(" "))
    }
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // 설정 로드 후 인자로 덮어쓰기
    let config = load_config();
    let dictionary_path = cli.dict.unwrap_or(config.dictionary_path);
    let ngram_path = cli.ngram.unwrap_or(config.ngram_path);
    let max_candidates = config.max_candidates.max(1);

    if cli.write_config {
        let effective = EngineConfig {
            dictionary_path: dictionary_path.clone(),
            ngram_path: ngram_path.clone(),
            max_candidates,
        };
        match save_config(&effective) {
            Ok(()) => log::info!("설정 저장: {}", config_path().display()),
            Err(e) => {
                eprintln!("⚠️  {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    let engine = Engine::new();
    let report = engine.reload_from_paths(dictionary_path, ngram_path);
    for e in &report.errors {
        eprintln!("⚠️  {}", e);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = if cli.inputs.is_empty() {
        io::stdin().lock().lines().try_for_each(|line| {
            let line = line?;
            let input = line.trim();
            if input.is_empty() {
                return Ok(());
            }
            writeln!(out, "{}", format_line(input, &engine.get_candidates(input), max_candidates))
        })
    } else {
        cli.inputs.iter().try_for_each(|input| {
            writeln!(out, "{}", format_line(input, &engine.get_candidates(input), max_candidates))
        })
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("출력 실패: {}", e);
            ExitCode::FAILURE
        }
    }
}
