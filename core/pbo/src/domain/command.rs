//! CLI から組み立てる実行コマンド

use std::path::PathBuf;

/// 入力の取り方
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplanationSource {
    /// 引数で直接渡された
    Text(String),
    /// ファイルから読む
    File(PathBuf),
    /// 標準入力から対話的に読む
    Interactive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PboCommand {
    Help,
    Diagnose {
        /// None のときは対話的に尋ねる
        topic: Option<String>,
        explanation: ExplanationSource,
    },
    History {
        limit: usize,
        /// 1 始まりの番号。指定時はその記録の全文を表示
        show: Option<usize>,
    },
}
