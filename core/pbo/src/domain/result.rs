//! 診断結果と LLM 応答の解析
//!
//! 応答は境界で 1 度だけ型に落とす。JSON オブジェクトでなければ解析エラー、
//! 欠けている・型が違うフィールドは既定値で埋め、未知のフィールドは無視する。
//! score の範囲やタグ名・文字数の契約は検査しない。

use super::tag::{find_tag, Tag};
use common::error::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// 診断結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    /// 0〜100（契約上）。応答に無ければ None
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub improve_tips: Vec<String>,
    /// 200〜320 文字（契約上）
    #[serde(default)]
    pub improved_explanation: String,
    /// 80〜140 文字（契約上）
    #[serde(default)]
    pub explanation_30sec: String,
}

impl DiagnosisResult {
    /// LLM の応答本文を解析する
    pub fn from_reply(raw: &str) -> Result<Self, Error> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| Error::parse(e.to_string(), raw))?;
        match value {
            Value::Object(obj) => Ok(Self::from_object(&obj)),
            other => Err(Error::parse(
                format!("expected a JSON object, got {}", json_kind(&other)),
                raw,
            )),
        }
    }

    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            score: obj.get("score").and_then(integer),
            strengths: string_list(obj.get("strengths")),
            tags: obj
                .get("tags")
                .and_then(Value::as_array)
                .map(|items| items.iter().filter_map(tag).collect())
                .unwrap_or_default(),
            improve_tips: string_list(obj.get("improve_tips")),
            improved_explanation: string(obj.get("improved_explanation")),
            explanation_30sec: string(obj.get("explanation_30sec")),
        }
    }

    /// 表示用の score（無ければ "N/A"）
    pub fn score_label(&self) -> String {
        self.score
            .map(|s| s.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// 保存済み記録の `result` を応答と同じ規則で読む。オブジェクトでなければ既定値
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<DiagnosisResult, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(obj) => DiagnosisResult::from_object(&obj),
        _ => DiagnosisResult::default(),
    })
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// 整数、または小数部 0 の数値だけを受け付ける
fn integer(v: &Value) -> Option<i64> {
    if let Some(n) = v.as_i64() {
        return Some(n);
    }
    let f = v.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn string(v: Option<&Value>) -> String {
    v.and_then(Value::as_str).unwrap_or_default().to_string()
}

fn string_list(v: Option<&Value>) -> Vec<String> {
    v.and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// タグ 1 件。description が無ければカタログの説明で補う
fn tag(v: &Value) -> Option<Tag> {
    let obj = v.as_object()?;
    let name = string(obj.get("name"));
    let mut description = string(obj.get("description"));
    if description.is_empty() {
        if let Some(def) = find_tag(&name) {
            description = def.description.to_string();
        }
    }
    Some(Tag {
        name,
        description,
        advice: string(obj.get("advice")),
    })
}
