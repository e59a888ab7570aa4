//! # ユーザー API ハンドラ

use std::sync::Arc;

use axum::{
   Json,
   body::Bytes,
   extract::State,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
   error::ApiError,
   handler::parse_json_body,
   usecase::{CreateUserInput, UserUseCase},
};

/// ユーザーハンドラーの State
pub struct UserState {
   pub usecase: UserUseCase,
}

/// ユーザー登録リクエスト
///
/// ボディなしのリクエストは両フィールド未指定として扱う。
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
   pub name:     Option<String>,
   pub username: Option<String>,
}

/// ユーザーを登録する
///
/// ## エンドポイント
/// POST /users
///
/// ## レスポンス
/// - 201: 登録したユーザー（空の `todos` を含む）
/// - 400: ユーザー名が使用済み、またはボディが JSON として読めない
pub async fn create_user(
   State(state): State<Arc<UserState>>,
   body: Bytes,
) -> Result<Response, ApiError> {
   let req: CreateUserRequest = parse_json_body(&body)?;

   let user = state
      .usecase
      .create_user(CreateUserInput {
         name:     req.name,
         username: req.username,
      })
      .await?;

   Ok((StatusCode::CREATED, Json(user)).into_response())
}
