use super::{file_store, noon};
use crate::adapter::StubLlm;
use crate::domain::{DiagnosisRequest, Record, TAG_CATALOG};
use crate::ports::outbound::RecordStore;
use crate::usecase::DiagnoseUseCase;
use common::adapter::MemoryLog;
use common::error::Error;
use std::sync::Arc;
use tempfile::tempdir;

const UNION_EXPLANATION: &str = "Union型は、値が複数の型のうちいずれか1つであることを表す型です。`string | number` のように縦棒でつなげて書き、受け取る側は typeof などで絞り込んでから使います。";

const UNION_REPLY: &str = r#"{
  "score": 72,
  "strengths": ["定義を一文で言えている", "書き方を示している"],
  "tags": [
    {"name": "具体", "description": "具体例やケースが不足", "advice": "関数の引数で使う例を1つ添える"}
  ],
  "improve_tips": ["絞り込みのコード例を書く"],
  "improved_explanation": "Union型とは、ある値が複数の型のどれか1つであることを表す型です。",
  "explanation_30sec": "Union型は『AかBのどちらか』を表す型です。"
}"#;

fn union_request() -> DiagnosisRequest {
    DiagnosisRequest::new("TypeScriptのUnion型", UNION_EXPLANATION).unwrap()
}

#[test]
fn test_union_scenario_diagnoses_and_saves() {
    let tmp = tempdir().unwrap();
    let log = Arc::new(MemoryLog::new());
    let llm = Arc::new(StubLlm::replying(UNION_REPLY));
    let store = file_store(tmp.path(), noon(), log.clone());
    let uc = DiagnoseUseCase::new(llm.clone(), store, log.clone());

    let diagnosis = uc.run(&union_request()).unwrap();
    assert_eq!(diagnosis.result.score, Some(72));
    assert_eq!(diagnosis.result.tags.len(), 1);
    assert_eq!(diagnosis.result.tags[0].name, "具体");

    let path = diagnosis.saved.unwrap();
    assert_eq!(path, tmp.path().join("20240101_120000_typescript_union.json"));

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["app"], "Proof by Output");
    assert_eq!(saved["created_at"], "2024-01-01T12:00:00+09:00");
    assert_eq!(saved["topic"], "TypeScriptのUnion型");
    assert_eq!(saved["explanation"], UNION_EXPLANATION);
    assert_eq!(
        saved["char_count"],
        UNION_EXPLANATION.chars().count() as u64
    );
    let reply: serde_json::Value = serde_json::from_str(UNION_REPLY).unwrap();
    assert_eq!(saved["result"], reply);

    assert_eq!(llm.call_count(), 1);
    assert_eq!(log.count("diagnosis requested"), 1);
    assert_eq!(log.count("diagnosis received"), 1);
    assert_eq!(log.count("record saved"), 1);
}

#[test]
fn test_prompt_carries_catalog_and_inputs() {
    let tmp = tempdir().unwrap();
    let log = Arc::new(MemoryLog::new());
    let llm = Arc::new(StubLlm::replying(UNION_REPLY));
    let uc = DiagnoseUseCase::new(llm.clone(), file_store(tmp.path(), noon(), log.clone()), log);

    uc.evaluate(&union_request()).unwrap();
    let calls = llm.calls.borrow();
    let (system, user) = &calls[0];
    for tag in TAG_CATALOG.iter() {
        assert!(system.contains(tag.name));
    }
    assert!(user.contains("TypeScriptのUnion型"));
    assert!(user.contains(UNION_EXPLANATION));
}

#[test]
fn test_saved_record_reloads_equal() {
    let tmp = tempdir().unwrap();
    let log = Arc::new(MemoryLog::new());
    let store = file_store(tmp.path(), noon(), log.clone());
    let uc = DiagnoseUseCase::new(
        Arc::new(StubLlm::replying(UNION_REPLY)),
        store.clone(),
        log,
    );

    let request = union_request();
    let diagnosis = uc.run(&request).unwrap();
    let path = diagnosis.saved.unwrap();

    let listed = store.list_recent(10).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].path, path);
    assert_eq!(
        listed[0].record,
        Record::new(&request, diagnosis.result, noon())
    );
}

#[test]
fn test_unparsable_reply_is_parse_error_and_writes_nothing() {
    let tmp = tempdir().unwrap();
    let log = Arc::new(MemoryLog::new());
    let uc = DiagnoseUseCase::new(
        Arc::new(StubLlm::replying("not json")),
        file_store(tmp.path(), noon(), log.clone()),
        log.clone(),
    );

    let err = uc.run(&union_request()).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }), "{:?}", err);
    assert_eq!(err.raw_reply(), Some("not json"));
    assert_eq!(err.exit_code(), 76);
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);

    let failure = log
        .records()
        .into_iter()
        .find(|r| r.message == "diagnosis reply unparsable")
        .unwrap();
    assert_eq!(failure.fields.unwrap()["raw"], "not json");
}

#[test]
fn test_service_error_writes_no_record() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("outputs");
    let log = Arc::new(MemoryLog::new());
    let uc = DiagnoseUseCase::new(
        Arc::new(StubLlm::failing(Error::service("HTTP request failed: connection refused"))),
        file_store(&out, noon(), log.clone()),
        log.clone(),
    );

    let err = uc.run(&union_request()).unwrap_err();
    assert!(matches!(err, Error::Service(_)));
    assert_eq!(err.exit_code(), 69);
    assert!(!out.exists());
    assert_eq!(log.count("diagnosis service failed"), 1);
    assert_eq!(log.count("record saved"), 0);
}

#[test]
fn test_storage_failure_keeps_diagnosis() {
    let tmp = tempdir().unwrap();
    let blocker = tmp.path().join("file");
    std::fs::write(&blocker, "not a directory").unwrap();
    let log = Arc::new(MemoryLog::new());
    let uc = DiagnoseUseCase::new(
        Arc::new(StubLlm::replying(UNION_REPLY)),
        file_store(&blocker.join("outputs"), noon(), log.clone()),
        log.clone(),
    );

    let diagnosis = uc.run(&union_request()).unwrap();
    assert_eq!(diagnosis.result.score, Some(72));
    let err = diagnosis.saved.unwrap_err();
    assert_eq!(err.exit_code(), 73);
    assert_eq!(log.count("record save failed"), 1);
}

#[test]
fn test_short_explanation_is_rejected_before_any_call() {
    let tmp = tempdir().unwrap();
    let log = Arc::new(MemoryLog::new());
    let llm = Arc::new(StubLlm::replying(UNION_REPLY));
    let uc = DiagnoseUseCase::new(llm.clone(), file_store(tmp.path(), noon(), log.clone()), log.clone());

    let err = uc.submit("TypeScriptのUnion型", &"あ".repeat(40)).unwrap_err();
    assert!(matches!(err, Error::Validation(_)), "{:?}", err);
    assert_eq!(err.exit_code(), 65);
    assert!(err.to_string().contains("あと20文字"));
    assert_eq!(llm.call_count(), 0);
    assert_eq!(log.count("diagnosis requested"), 0);
    assert_eq!(log.count("input rejected"), 1);
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn test_blank_topic_is_rejected_before_any_call() {
    let tmp = tempdir().unwrap();
    let log = Arc::new(MemoryLog::new());
    let llm = Arc::new(StubLlm::replying(UNION_REPLY));
    let uc = DiagnoseUseCase::new(llm.clone(), file_store(tmp.path(), noon(), log.clone()), log);

    let err = uc.submit("   ", UNION_EXPLANATION).unwrap_err();
    assert_eq!(err.exit_code(), 65);
    assert_eq!(llm.call_count(), 0);
}

#[test]
fn test_submit_keeps_topic_as_given() {
    let tmp = tempdir().unwrap();
    let log = Arc::new(MemoryLog::new());
    let llm = Arc::new(StubLlm::replying(UNION_REPLY));
    let store = file_store(tmp.path(), noon(), log.clone());
    let uc = DiagnoseUseCase::new(llm.clone(), store.clone(), log);

    let diagnosis = uc.submit(" TypeScriptのUnion型 ", UNION_EXPLANATION).unwrap();
    let path = diagnosis.saved.unwrap();
    assert_eq!(path, tmp.path().join("20240101_120000_typescript_union.json"));
    assert_eq!(store.list_recent(1).unwrap()[0].record.topic, " TypeScriptのUnion型 ");
    assert_eq!(llm.call_count(), 1);
}
