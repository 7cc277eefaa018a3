//! 端末表示（読み取り専用）

use crate::domain::{DiagnosisResult, StoredRecord};
use std::io::{self, Write};

/// 診断結果を表示する
pub fn render_result<W: Write>(out: &mut W, result: &DiagnosisResult) -> io::Result<()> {
    writeln!(out, "== スコア: {} / 100 ==", result.score_label())?;

    writeln!(out)?;
    writeln!(out, "■ 良い点")?;
    bullet_list(out, &result.strengths)?;

    writeln!(out)?;
    writeln!(out, "■ 検知タグ")?;
    if result.tags.is_empty() {
        writeln!(out, "  (なし)")?;
    }
    for tag in &result.tags {
        writeln!(out, "  [{}] {}", tag.name, tag.description)?;
        if !tag.advice.is_empty() {
            writeln!(out, "      → {}", tag.advice)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "■ 改善提案")?;
    for (i, tip) in result.improve_tips.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, tip)?;
    }
    if result.improve_tips.is_empty() {
        writeln!(out, "  (なし)")?;
    }

    writeln!(out)?;
    writeln!(out, "■ 改善版説明")?;
    writeln!(out, "{}", or_none(&result.improved_explanation))?;

    writeln!(out)?;
    writeln!(out, "■ 30秒説明")?;
    writeln!(out, "{}", or_none(&result.explanation_30sec))?;
    Ok(())
}

/// 履歴一覧（1 始まりの番号付き）
pub fn render_history<W: Write>(out: &mut W, records: &[StoredRecord]) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(out, "履歴はまだありません。");
    }
    for (i, stored) in records.iter().enumerate() {
        let r = &stored.record;
        writeln!(
            out,
            "{}. {} | score: {} | {}",
            i + 1,
            r.topic,
            r.result.score_label(),
            r.created_at
        )?;
        writeln!(
            out,
            "   {}文字 | {}",
            r.char_count,
            stored.path.display()
        )?;
    }
    Ok(())
}

/// 保存済みの記録 1 件を全文表示する
pub fn render_record<W: Write>(out: &mut W, stored: &StoredRecord) -> io::Result<()> {
    let r = &stored.record;
    writeln!(out, "トピック: {}", r.topic)?;
    writeln!(out, "作成日時: {}", r.created_at)?;
    writeln!(out, "ファイル: {}", stored.path.display())?;
    writeln!(out)?;
    writeln!(out, "■ 説明文（{}文字）", r.char_count)?;
    writeln!(out, "{}", r.explanation)?;
    writeln!(out)?;
    render_result(out, &r.result)
}

fn bullet_list<W: Write>(out: &mut W, items: &[String]) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "  (なし)");
    }
    for item in items {
        writeln!(out, "  - {}", item)?;
    }
    Ok(())
}

fn or_none(text: &str) -> &str {
    if text.is_empty() {
        "(なし)"
    } else {
        text
    }
}
