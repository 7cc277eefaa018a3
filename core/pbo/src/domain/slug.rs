//! トピック名からファイル名に使える slug を作る

use regex::Regex;
use std::sync::OnceLock;

const MAX_SLUG_LEN: usize = 40;
const FALLBACK_SLUG: &str = "topic";

fn unsafe_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9_-]+").expect("slug pattern is valid"))
}

/// `[a-z0-9_-]` のみ・最大 40 文字・前後に `_` なし。空になれば "topic"。
///
/// 切り詰めで末尾に `_` が残った場合も落とすので、結果に再適用しても変わらない。
pub fn safe_slug(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let replaced = unsafe_run().replace_all(&lowered, "_");
    let stripped = replaced.trim_matches('_');
    let truncated: String = stripped.chars().take(MAX_SLUG_LEN).collect();
    let slug = truncated.trim_end_matches('_');
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}
