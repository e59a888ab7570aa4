//! # Listo API サーバー
//!
//! ユーザーごとの ToDo リストを管理する HTTP API。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────┐     ┌──────────────────────────────┐     ┌──────────────┐
//! │  Client  │────▶│ handler ─▶ usecase           │────▶│ UserRegistry │
//! │          │     │   ▲                          │     │ (in-memory)  │
//! └──────────┘     │   └─ middleware::identify    │     └──────────────┘
//!                  └──────────────────────────────┘
//! ```
//!
//! ToDo 系のリクエストは、まず [`middleware::identify_user`] が `username`
//! ヘッダーからユーザーを特定し、その後ハンドラがユースケースを呼び出す。
//!
//! ## モジュール構成
//!
//! - [`app`] - ルーターとレイヤーの組み立て
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`middleware`] - ユーザー特定ミドルウェア
//! - [`usecase`] - ユーザー登録と ToDo 操作
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use listo_api::app::build_app;
//! use listo_domain::clock::SystemClock;
//! use listo_infra::UserRegistry;
//!
//! let app = build_app(Arc::new(UserRegistry::new()), Arc::new(SystemClock));
//! axum::serve(listener, app).await?;
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod usecase;
