//! つまずきタグ（固定 6 種のカタログと、診断結果に載るタグ）

use serde::{Deserialize, Serialize};

/// カタログの 1 エントリ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagDef {
    pub name: &'static str,
    pub description: &'static str,
}

/// つまずきタグのカタログ（順序はプロンプトへの列挙順）
pub static TAG_CATALOG: [TagDef; 6] = [
    TagDef {
        name: "論点",
        description: "何について話しているかが曖昧",
    },
    TagDef {
        name: "根拠",
        description: "なぜそう言えるかの理由が不足",
    },
    TagDef {
        name: "具体",
        description: "具体例やケースが不足",
    },
    TagDef {
        name: "手順",
        description: "説明の順序や進め方が不明瞭",
    },
    TagDef {
        name: "留意",
        description: "注意点・制約・例外条件が不足",
    },
    TagDef {
        name: "用語",
        description: "専門用語の説明が不足",
    },
];

/// 1 件の診断で返すタグの上限
pub const MAX_TAGS: usize = 3;

/// 名前でカタログを引く
pub fn find_tag(name: &str) -> Option<&'static TagDef> {
    TAG_CATALOG.iter().find(|t| t.name == name)
}

/// 診断結果に含まれるタグ。name がカタログにあることは保証しない
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub advice: String,
}

impl Tag {
    pub fn is_cataloged(&self) -> bool {
        find_tag(&self.name).is_some()
    }
}
