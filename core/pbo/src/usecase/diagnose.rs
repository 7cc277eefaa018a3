//! 診断ユースケース: プロンプト組み立て → LLM 1 往復 → 解析 → 保存
//!
//! 入力検証は LLM を呼ぶ前に済ませる。通信・解析エラーは呼び出し側へ返し、
//! 保存エラーは診断結果とは別に返す。

use crate::domain::{count_chars, DiagnosisRequest, DiagnosisResult, Prompt};
use crate::ports::outbound::{LlmCompletion, RecordStore};
use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::path::PathBuf;
use std::sync::Arc;

/// 1 回の診断の結末。保存の成否は診断の成否と独立
#[derive(Debug)]
pub struct Diagnosis {
    pub result: DiagnosisResult,
    pub saved: Result<PathBuf, Error>,
}

pub struct DiagnoseUseCase {
    llm: Arc<dyn LlmCompletion>,
    store: Arc<dyn RecordStore>,
    log: Arc<dyn Log>,
}

impl DiagnoseUseCase {
    pub fn new(llm: Arc<dyn LlmCompletion>, store: Arc<dyn RecordStore>, log: Arc<dyn Log>) -> Self {
        Self { llm, store, log }
    }

    /// LLM に診断させて結果を型に落とす。リトライはしない
    pub fn evaluate(&self, request: &DiagnosisRequest) -> Result<DiagnosisResult, Error> {
        let prompt = Prompt::build(request);
        self.log(
            LogRecord::new(LogLevel::Info, "diagnosis requested")
                .field("model", self.llm.model())
                .field("topic", request.topic())
                .field("char_count", request.char_count()),
        );

        let reply = match self.llm.complete(&prompt.system, &prompt.user) {
            Ok(reply) => reply,
            Err(e) => {
                self.log(
                    LogRecord::new(LogLevel::Error, "diagnosis service failed")
                        .field("error", e.to_string()),
                );
                return Err(e);
            }
        };

        match DiagnosisResult::from_reply(&reply) {
            Ok(result) => {
                self.log(
                    LogRecord::new(LogLevel::Info, "diagnosis received")
                        .field("score", result.score)
                        .field("tags", result.tags.len()),
                );
                Ok(result)
            }
            Err(e) => {
                let mut rec = LogRecord::new(LogLevel::Error, "diagnosis reply unparsable")
                    .field("reason", e.to_string());
                if let Some(raw) = e.raw_reply() {
                    rec = rec.field("raw", raw);
                }
                self.log(rec);
                Err(e)
            }
        }
    }

    /// 記録を保存する
    pub fn save(&self, request: &DiagnosisRequest, result: &DiagnosisResult) -> Result<PathBuf, Error> {
        self.store.save(request, result).map_err(|e| {
            self.log(
                LogRecord::new(LogLevel::Error, "record save failed").field("error", e.to_string()),
            );
            e
        })
    }

    /// 生の入力を検証してから診断する。検証に通らなければ LLM は呼ばない
    pub fn submit(&self, topic: &str, explanation: &str) -> Result<Diagnosis, Error> {
        let request = DiagnosisRequest::new(topic, explanation).map_err(|e| {
            self.log(
                LogRecord::new(LogLevel::Info, "input rejected")
                    .field("char_count", count_chars(explanation))
                    .field("reason", e.to_string()),
            );
            Error::from(e)
        })?;
        self.run(&request)
    }

    /// 診断して保存する。診断に失敗したら何も保存しない
    pub fn run(&self, request: &DiagnosisRequest) -> Result<Diagnosis, Error> {
        let result = self.evaluate(request)?;
        let saved = self.save(request, &result);
        Ok(Diagnosis { result, saved })
    }

    fn log(&self, record: LogRecord) {
        let _ = self.log.log(&record.layer("usecase").kind("diagnosis"));
    }
}
