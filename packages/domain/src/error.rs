//! # ドメイン層エラー定義
//!
//! ユーザー登録と ToDo 操作で発生するビジネスルール違反を表現する。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `UsernameTaken` | 400 Bad Request | ユーザー名の重複 |
//! | `MissingFields` | 400 Bad Request | `title` / `deadline` の欠落 |
//! | `InvalidDeadline` | 400 Bad Request | 期限として解釈できない値 |
//! | `TodoNotFound` | 404 Not Found | 指定 ID の ToDo が存在しない |
//!
//! ステータスコードへの変換は API 層（`listo_api::error`）の責務。

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// いずれもクライアント入力に起因するエラーであり、リトライ対象ではない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
   /// 同じユーザー名のユーザーが既に登録されている
   #[error("ユーザー名は既に使用されています")]
   UsernameTaken,

   /// ToDo の `title` または `deadline` が未指定（空文字列を含む）
   #[error("title と deadline は必須です")]
   MissingFields,

   /// 期限の文字列が日時として解釈できない
   #[error("期限を解釈できません: {0}")]
   InvalidDeadline(String),

   /// 指定された ID の ToDo がユーザーの ToDo リストに存在しない
   #[error("ToDo が見つかりません: {id}")]
   TodoNotFound {
      /// 検索に使用した識別子（パスパラメータの生の値）
      id: String,
   },
}
