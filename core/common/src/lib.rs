//! Proof by Output 共通ライブラリ
//!
//! エラー型、外界への Outbound ポートとその標準アダプター、LLM プロバイダ層を提供します。

/// エラーハンドリング
pub mod error;

/// Ports & Adapters のポート定義
pub mod ports;

/// ポートの標準実装とテスト用実装
pub mod adapter;

/// LLMドライバーとプロバイダ
pub mod llm;
