//! # Listo ドメイン層
//!
//! ユーザーと ToDo のドメインモデル、および CRUD の不変条件を定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層は HTTP やストレージの詳細を一切知らない。
//! 時刻は [`clock::Clock`] 経由で注入する。
//!
//! ## モジュール構成
//!
//! - [`clock`] - 現在時刻の抽象化
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`timestamp`] - 期限のパースとタイムスタンプの JSON 表現
//! - [`todo`] - ToDo エンティティとユーザーごとの ToDo リスト
//! - [`user`] - ユーザーエンティティ
//!
//! ## 使用例
//!
//! ```rust
//! use chrono::Utc;
//! use listo_domain::{
//!     todo::TodoFields,
//!     user::User,
//! };
//!
//! let mut user = User::new(Some("Alice".to_string()), Some("alice".to_string()));
//! let fields = TodoFields::new(Some("Buy milk".to_string()), Some("2024-01-01".to_string()))?;
//! let todo = user.todos_mut().add(fields, Utc::now())?;
//!
//! assert!(!todo.is_done());
//! assert_eq!(user.todos().len(), 1);
//! # Ok::<(), listo_domain::DomainError>(())
//! ```

#[macro_use]
mod macros;

pub mod clock;
pub mod error;
pub mod timestamp;
pub mod todo;
pub mod user;

pub use error::DomainError;
