//! 診断用プロンプトの組み立て
//!
//! system はタグカタログと出力ルール・JSON スキーマ、user はトピックと説明文をそのまま埋め込む。

use super::request::DiagnosisRequest;
use super::tag::{TagDef, MAX_TAGS, TAG_CATALOG};

/// LLM に送る 2 つのメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

impl Prompt {
    pub fn build(request: &DiagnosisRequest) -> Self {
        Self {
            system: system_prompt(),
            user: user_prompt(request.topic(), request.explanation()),
        }
    }
}

fn tag_lines(catalog: &[TagDef]) -> String {
    catalog
        .iter()
        .map(|t| format!("- {}：{}", t.name, t.description))
        .collect::<Vec<_>>()
        .join("\n")
}

/// system 指示（カタログとルールだけで決まる）
pub fn system_prompt() -> String {
    let example = &TAG_CATALOG[0];
    format!(
        r#"あなたは学習内容の説明文を診断するコーチです。
ユーザーの説明文を評価し、つまずきタグを返します。

# つまずきタグ定義
{tags}

# 出力ルール
- 必ず日本語
- 必ずJSONのみ（前置き・補足文は禁止）
- tags は上記{count}タグから最大{max_tags}つ選ぶ
- score は 0〜100 の整数
- improve_tips は少なくとも1件、最大3件
- improved_explanation は200〜320文字
- explanation_30sec は80〜140文字

# JSONスキーマ
{{
  "score": 0,
  "strengths": ["..."],
  "tags": [
    {{
      "name": "{example_name}",
      "description": "{example_description}",
      "advice": "改善方法を1文"
    }}
  ],
  "improve_tips": ["..."],
  "improved_explanation": "...",
  "explanation_30sec": "..."
}}
"#,
        tags = tag_lines(&TAG_CATALOG),
        count = TAG_CATALOG.len(),
        max_tags = MAX_TAGS,
        example_name = example.name,
        example_description = example.description,
    )
}

/// user メッセージ（エスケープせずそのまま埋め込む）
pub fn user_prompt(topic: &str, explanation: &str) -> String {
    format!("[トピック]\n{}\n\n[説明文]\n{}\n", topic, explanation)
}
