//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{
    EnvResolver, FileJsonLog, FileSystem, Log, StdClock, StdEnvResolver, StdFileSystem, StderrLog,
    TeeLog,
};
use common::error::Error;

use crate::adapter::{DiagnosisConfig, DriverLlmCompletion, JsonFileRecordStore};
use crate::cli::Config;
use crate::ports::outbound::RecordStore;
use crate::usecase::{DiagnoseUseCase, HistoryUseCase};

/// main が使う依存一式
pub struct App {
    pub fs: Arc<dyn FileSystem>,
    pub logger: Arc<dyn Log>,
    pub config: DiagnosisConfig,
    pub store: Arc<dyn RecordStore>,
    pub history: HistoryUseCase,
}

impl App {
    /// LLM クライアントは diagnose のときだけ作る。API キーが無ければ Configuration エラー
    pub fn diagnose_use_case(&self) -> Result<DiagnoseUseCase, Error> {
        let llm = DriverLlmCompletion::from_config(&self.config)?;
        Ok(DiagnoseUseCase::new(
            Arc::new(llm),
            Arc::clone(&self.store),
            Arc::clone(&self.logger),
        ))
    }
}

/// 配線: プロセスの環境変数（と .env）と CLI 指定から App を組み立てる
pub fn wire_pbo(cli: &Config) -> Result<App, Error> {
    wire_pbo_with(cli, &StdEnvResolver)
}

/// 環境変数の読み先を差し替えて App を組み立てる
pub fn wire_pbo_with(cli: &Config, env: &dyn EnvResolver) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let config = DiagnosisConfig::resolve(
        env,
        cli.model.as_deref(),
        cli.output_dir.as_deref(),
    )?;

    let file_log: Arc<dyn Log> = Arc::new(FileJsonLog::new(Arc::clone(&fs), &config.log_file));
    let logger: Arc<dyn Log> = if cli.verbose {
        let stderr_log: Arc<dyn Log> = Arc::new(StderrLog);
        Arc::new(TeeLog::new(vec![file_log, stderr_log]))
    } else {
        file_log
    };

    let store: Arc<dyn RecordStore> = Arc::new(JsonFileRecordStore::new(
        Arc::clone(&fs),
        Arc::new(StdClock),
        Arc::clone(&logger),
        config.output_dir.clone(),
    ));
    let history = HistoryUseCase::new(Arc::clone(&store));

    Ok(App {
        fs,
        logger,
        config,
        store,
        history,
    })
}
