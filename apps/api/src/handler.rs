//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//! ハンドラは薄く保ち、ロジックはユースケース層に委譲する。
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs          # 親モジュール（re-export）
//! └── handler/
//!     ├── health.rs   # ヘルスチェック
//!     ├── todo.rs     # ToDo の一覧・作成・更新・完了・削除
//!     └── user.rs     # ユーザー登録
//! ```

use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

pub mod health;
pub mod todo;
pub mod user;

pub use health::health_check;
pub use todo::{TodoState, complete_todo, create_todo, delete_todo, list_todos, update_todo};
pub use user::{UserState, create_user};

/// リクエストボディを JSON として読み取る
///
/// ボディが空（空白のみを含む）の場合は `{}` と同じく `T::default()` を返す。
/// `Content-Type` は見ない。JSON として読めない場合は [`ApiError::InvalidBody`]。
pub(crate) fn parse_json_body<T>(body: &Bytes) -> Result<T, ApiError>
where
   T: DeserializeOwned + Default,
{
   if body.iter().all(u8::is_ascii_whitespace) {
      return Ok(T::default());
   }

   Ok(serde_json::from_slice(body)?)
}
