//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換を行う。
//!
//! ## エラーの階層
//!
//! ```text
//! ドメイン層エラー (DomainError) / JSON デシリアライズエラー (serde_json::Error)
//!        ↓ From
//! API エラー (ApiError)
//!        ↓ IntoResponse
//! HTTP レスポンス (StatusCode + { "error": "..." })
//! ```
//!
//! ## マッピング
//!
//! | ApiError | HTTP Status |
//! |----------|-------------|
//! | MissingCredential | 400 |
//! | UserNotFound | 404 |
//! | UsernameTaken | 400 |
//! | MissingFields | 400 |
//! | InvalidDeadline | 400 |
//! | TodoNotFound | 404 |
//! | InvalidBody | 400 |
//!
//! いずれもクライアント起因のエラーのため、ログは `debug` レベルに留める。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use listo_domain::DomainError;
use listo_shared::ErrorBody;
use thiserror::Error;

/// API 層で発生するエラー
///
/// `Display` の文言がそのままレスポンスの `error` フィールドになる。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
   /// `username` ヘッダーが未指定または空
   #[error("username header must be specified")]
   MissingCredential,

   /// `username` ヘッダーに一致するユーザーがいない
   #[error("User not found")]
   UserNotFound,

   /// ユーザー名が既に使用されている
   #[error("User name already taken!")]
   UsernameTaken,

   /// `title` / `deadline` が未指定
   #[error("Title and deadline are required in body")]
   MissingFields,

   /// 期限を日時として解釈できない
   #[error("Invalid deadline: {0}")]
   InvalidDeadline(String),

   /// 指定 ID の ToDo がない
   #[error("Todo not found")]
   TodoNotFound,

   /// リクエストボディが JSON として読めない
   #[error("Invalid request body: {0}")]
   InvalidBody(String),
}

impl ApiError {
   pub fn status(&self) -> StatusCode {
      match self {
         ApiError::UserNotFound | ApiError::TodoNotFound => StatusCode::NOT_FOUND,
         ApiError::MissingCredential
         | ApiError::UsernameTaken
         | ApiError::MissingFields
         | ApiError::InvalidDeadline(_)
         | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
      }
   }
}

impl From<DomainError> for ApiError {
   fn from(error: DomainError) -> Self {
      match error {
         DomainError::UsernameTaken => ApiError::UsernameTaken,
         DomainError::MissingFields => ApiError::MissingFields,
         DomainError::InvalidDeadline(raw) => ApiError::InvalidDeadline(raw),
         DomainError::TodoNotFound { .. } => ApiError::TodoNotFound,
      }
   }
}

impl From<serde_json::Error> for ApiError {
   fn from(error: serde_json::Error) -> Self {
      ApiError::InvalidBody(error.to_string())
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let status = self.status();
      tracing::debug!(status = status.as_u16(), error = %self, "リクエストを拒否しました");

      (status, Json(ErrorBody::new(self.to_string()))).into_response()
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_ドメインエラーを対応するapiエラーに変換する() {
      assert_eq!(
         ApiError::from(DomainError::UsernameTaken),
         ApiError::UsernameTaken
      );
      assert_eq!(
         ApiError::from(DomainError::MissingFields),
         ApiError::MissingFields
      );
      assert_eq!(
         ApiError::from(DomainError::InvalidDeadline("later".to_string())),
         ApiError::InvalidDeadline("later".to_string())
      );
      assert_eq!(
         ApiError::from(DomainError::TodoNotFound {
            id: "abc".to_string(),
         }),
         ApiError::TodoNotFound
      );
   }

   #[tokio::test]
   async fn test_into_response_はステータスとerrorボディを返す() {
      let response = ApiError::UserNotFound.into_response();

      assert_eq!(response.status(), StatusCode::NOT_FOUND);
      let body = axum::body::to_bytes(response.into_body(), usize::MAX)
         .await
         .unwrap();
      let json: ErrorBody = serde_json::from_slice(&body).unwrap();
      assert_eq!(json, ErrorBody::new("User not found"));
   }

   #[test]
   fn test_クライアントエラーはすべて4xxになる() {
      let errors = [
         ApiError::MissingCredential,
         ApiError::UserNotFound,
         ApiError::UsernameTaken,
         ApiError::MissingFields,
         ApiError::InvalidDeadline(String::new()),
         ApiError::TodoNotFound,
         ApiError::InvalidBody(String::new()),
      ];

      assert!(errors.iter().all(|error| error.status().is_client_error()));
   }
}
