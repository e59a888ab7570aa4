//! # Listo 共有ユーティリティ
//!
//! 各クレートで共通に使うレスポンス型とトレーシング設定を提供する。
//!
//! ## モジュール構成
//!
//! - [`error_body`] - エラーレスポンスの JSON 形式 `{ "error": "..." }`
//! - [`observability`] - トレーシング初期化と Request ID 付きスパン

pub mod error_body;
pub mod observability;

pub use error_body::ErrorBody;
