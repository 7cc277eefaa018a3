//! 端末フロントエンド: 引数解析・対話入力・結果表示

pub mod args;
pub mod input;
pub mod render;

pub use args::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
