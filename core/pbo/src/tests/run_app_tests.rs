use crate::cli::Config;
use crate::ports::inbound::UseCaseRunner;
use crate::wiring;
use common::adapter::MapEnvResolver;
use common::error::Error;
use std::net::TcpListener;
use std::path::Path;
use tempfile::tempdir;

/// 差し替えた環境変数で App を組み立て、Runner で run する（テスト用の入口）
fn run_app(config: Config, env: &MapEnvResolver) -> Result<i32, Error> {
    let app = wiring::wire_pbo_with(&config, env)?;
    let runner = crate::Runner { app };
    runner.run(config)
}

/// ログを一時ディレクトリに向けた環境
fn env_in(dir: &Path) -> MapEnvResolver {
    let log_file = dir.join("logs").join("pbo.jsonl");
    MapEnvResolver::new().with("PBO_LOG_FILE", &log_file.to_string_lossy())
}

/// 接続を受け付けないエンドポイント
fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn history_config(dir: &Path) -> Config {
    Config {
        history: true,
        output_dir: Some(dir.to_path_buf()),
        ..Default::default()
    }
}

#[test]
fn test_run_app_with_help() {
    let tmp = tempdir().unwrap();
    let config = Config {
        help: true,
        ..Default::default()
    };
    assert_eq!(run_app(config, &env_in(tmp.path())).unwrap(), 0);
    assert!(tmp.path().join("logs").join("pbo.jsonl").exists());
}

#[test]
fn test_run_app_history_on_missing_dir() {
    let tmp = tempdir().unwrap();
    let config = history_config(&tmp.path().join("outputs"));
    assert_eq!(run_app(config, &env_in(tmp.path())).unwrap(), 0);
}

#[test]
fn test_run_app_history_show_out_of_range() {
    let tmp = tempdir().unwrap();
    let config = Config {
        show: Some(3),
        ..history_config(&tmp.path().join("outputs"))
    };
    let err = run_app(config, &env_in(tmp.path())).unwrap_err();
    assert_eq!(err.exit_code(), 64);
}

#[test]
fn test_run_app_diagnose_without_api_key_stops_before_input() {
    // トピック・説明文とも未指定（対話入力）でも stdin を読む前に止まる
    let tmp = tempdir().unwrap();
    let outputs = tmp.path().join("outputs");
    let config = Config {
        output_dir: Some(outputs.clone()),
        ..Default::default()
    };
    let err = run_app(config, &env_in(tmp.path())).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)), "{:?}", err);
    assert_eq!(err.exit_code(), 78);
    assert!(err.to_string().contains("OPENAI_API_KEY"));
    assert!(!outputs.exists());
}

#[test]
fn test_run_app_diagnose_rejects_short_input_before_sending() {
    // 送信していれば到達不能なエンドポイントで Service (69) になる
    let tmp = tempdir().unwrap();
    let outputs = tmp.path().join("outputs");
    let env = env_in(tmp.path())
        .with("OPENAI_API_KEY", "sk-test")
        .with("PBO_BASE_URL", &closed_endpoint());
    let config = Config {
        output_dir: Some(outputs.clone()),
        topic: Some("Rustの所有権".to_string()),
        explanation: Some("所有権とは".to_string()),
        ..Default::default()
    };
    let err = run_app(config, &env).unwrap_err();
    assert!(matches!(err, Error::Validation(_)), "{:?}", err);
    assert_eq!(err.exit_code(), 65);
    assert!(!outputs.exists());
}

#[test]
fn test_run_app_invalid_timeout_is_configuration_error() {
    let tmp = tempdir().unwrap();
    let env = env_in(tmp.path()).with("PBO_TIMEOUT_SECS", "abc");
    let err = run_app(history_config(tmp.path()), &env).unwrap_err();
    assert_eq!(err.exit_code(), 78);
}
