//! # Listo インフラ層
//!
//! ユーザーと ToDo を保持するインメモリストアを提供する。
//!
//! ## 設計方針
//!
//! - **明示的な所有**: ストアはプロセス起動時に一度だけ構築し、
//!   `Arc` で各ハンドラに渡す（モジュールレベルのグローバル状態は持たない）
//! - **揮発性**: プロセスの再起動で全データが失われる
//! - **ユーザー単位の排他制御**: ToDo の読み取り・変更はユーザーごとの
//!   ロック内で行い、同一ユーザーへの同時更新でも更新が失われない
//!
//! ## モジュール構成
//!
//! - [`registry`] - ユーザーレジストリとユーザーハンドル

pub mod registry;

pub use registry::{UserEntry, UserHandle, UserRegistry};
