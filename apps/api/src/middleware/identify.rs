//! # ユーザー特定ミドルウェア
//!
//! ToDo 系のすべてのリクエストの前段で、`username` ヘッダーから
//! 操作対象のユーザーを特定する。認証は行わない。
//!
//! ## 使い方
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//!
//! Router::new()
//!     .route("/todos", get(list_todos))
//!     .route_layer(from_fn_with_state(registry.clone(), identify_user))
//! ```
//!
//! 特定したユーザーは [`CurrentUser`] としてリクエストの extensions に格納され、
//! ハンドラは `Extension<CurrentUser>` で受け取る。

use std::sync::Arc;

use axum::{
   body::Body,
   extract::State,
   http::{HeaderMap, Request},
   middleware::Next,
   response::Response,
};
use listo_infra::{UserHandle, UserRegistry};

use crate::error::ApiError;

/// ユーザーを特定するヘッダー名
pub const USERNAME_HEADER: &str = "username";

/// ミドルウェアが特定したリクエスト元のユーザー
#[derive(Clone)]
pub struct CurrentUser(pub UserHandle);

/// `username` ヘッダーからユーザーを特定する
///
/// - ヘッダーが未指定または空: 400（[`ApiError::MissingCredential`]）
/// - 一致するユーザーがいない: 404（[`ApiError::UserNotFound`]）
///
/// レジストリは変更しない。
pub async fn identify_user(
   State(registry): State<Arc<UserRegistry>>,
   mut request: Request<Body>,
   next: Next,
) -> Result<Response, ApiError> {
   let username = extract_username(request.headers())?;

   let user = registry
      .find_by_username(&username)
      .await
      .ok_or(ApiError::UserNotFound)?;

   tracing::debug!(user_id = %user.id(), "リクエスト元のユーザーを特定しました");
   request.extensions_mut().insert(CurrentUser(user));

   Ok(next.run(request).await)
}

/// ヘッダーからユーザー名を取り出す
///
/// UTF-8 として読めない値はどのユーザー名にも一致しないため、
/// [`ApiError::UserNotFound`] として扱う。
fn extract_username(headers: &HeaderMap) -> Result<String, ApiError> {
   let value = headers
      .get(USERNAME_HEADER)
      .filter(|value| !value.is_empty())
      .ok_or(ApiError::MissingCredential)?;

   std::str::from_utf8(value.as_bytes())
      .map(str::to_string)
      .map_err(|_| ApiError::UserNotFound)
}
