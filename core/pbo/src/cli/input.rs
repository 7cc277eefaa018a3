//! 対話入力: トピック 1 行と、空行か EOF までの説明文
//!
//! 案内と文字数の表示は `out`（通常は stderr）へ書く。結果表示の stdout とは混ぜない。

use crate::domain::{count_chars, ExplanationSource, MIN_CHARS};
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::io::{BufRead, Write};

/// トピックを 1 行読む（行末の改行だけを落とす）
pub fn read_topic<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<String, Error> {
    write!(out, "トピック: ")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// 説明文を読む。1 行ごとに現在の文字数と最低文字数を表示する
pub fn read_explanation<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<String, Error> {
    writeln!(
        out,
        "説明文を入力してください（{}文字以上。空行で終了）:",
        MIN_CHARS
    )?;
    let mut lines: Vec<String> = Vec::new();
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            break;
        }
        lines.push(line.to_string());
        let count = count_chars(&lines.join("\n"));
        let mark = if count >= MIN_CHARS { "OK" } else { ".." };
        writeln!(out, "  [{}/{} {}]", count, MIN_CHARS, mark)?;
    }
    Ok(lines.join("\n"))
}

/// ファイルから読んだ説明文の末尾の改行を落とす
pub fn normalize_file_text(text: &str) -> String {
    text.trim_end_matches(['\r', '\n']).to_string()
}

/// 引数・ファイル・対話入力からトピックと説明文を集める。検証は呼び出し側で行う
pub fn collect_input<R: BufRead, W: Write>(
    fs: &dyn FileSystem,
    topic: Option<String>,
    source: ExplanationSource,
    input: &mut R,
    out: &mut W,
) -> Result<(String, String), Error> {
    let topic = match topic {
        Some(t) => t,
        None => read_topic(input, out)?,
    };
    let explanation = match source {
        ExplanationSource::Text(text) => text,
        ExplanationSource::File(path) => normalize_file_text(&fs.read_to_string(&path)?),
        ExplanationSource::Interactive => read_explanation(input, out)?,
    };
    Ok((topic, explanation))
}
