//! # ToDo API ハンドラ
//!
//! すべてのエンドポイントは `identify_user` ミドルウェアの後段で動作し、
//! [`CurrentUser`] を前提とする。
//!
//! | エンドポイント | 成功時 |
//! |----------------|--------|
//! | GET /todos | 200 ToDo 配列 |
//! | POST /todos | 201 作成した ToDo |
//! | PUT /todos/{id} | 202 更新後の ToDo |
//! | PATCH /todos/{id}/done | 202 完了後の ToDo |
//! | DELETE /todos/{id} | 204 ボディなし |

use std::sync::Arc;

use axum::{
   Extension,
   Json,
   body::Bytes,
   extract::{Path, State},
   http::StatusCode,
   response::{IntoResponse, Response},
};
use listo_domain::todo::TodoFields;
use serde::Deserialize;

use crate::{
   error::ApiError,
   handler::parse_json_body,
   middleware::CurrentUser,
   usecase::TodoUseCase,
};

/// ToDo ハンドラーの State
pub struct TodoState {
   pub usecase: TodoUseCase,
}

/// ToDo 作成・更新リクエスト
///
/// 存在チェックは [`TodoFields::new`] で行うため、ここではすべて省略可能とする。
#[derive(Debug, Default, Deserialize)]
pub struct TodoRequest {
   pub title:    Option<String>,
   pub deadline: Option<String>,
}

impl TodoRequest {
   fn into_fields(self) -> Result<TodoFields, ApiError> {
      Ok(TodoFields::new(self.title, self.deadline)?)
   }
}

/// ToDo 一覧を取得する
///
/// ## エンドポイント
/// GET /todos
pub async fn list_todos(
   State(state): State<Arc<TodoState>>,
   Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Response, ApiError> {
   let todos = state.usecase.list_todos(&user).await;

   Ok((StatusCode::OK, Json(todos)).into_response())
}

/// ToDo を作成する
///
/// ## エンドポイント
/// POST /todos
pub async fn create_todo(
   State(state): State<Arc<TodoState>>,
   Extension(CurrentUser(user)): Extension<CurrentUser>,
   body: Bytes,
) -> Result<Response, ApiError> {
   let req: TodoRequest = parse_json_body(&body)?;
   let fields = req.into_fields()?;

   let todo = state.usecase.create_todo(&user, fields).await?;

   Ok((StatusCode::CREATED, Json(todo)).into_response())
}

/// ToDo の `title` と `deadline` を更新する
///
/// ## エンドポイント
/// PUT /todos/{id}
pub async fn update_todo(
   State(state): State<Arc<TodoState>>,
   Extension(CurrentUser(user)): Extension<CurrentUser>,
   Path(id): Path<String>,
   body: Bytes,
) -> Result<Response, ApiError> {
   let req: TodoRequest = parse_json_body(&body)?;
   let fields = req.into_fields()?;

   let todo = state.usecase.update_todo(&user, &id, fields).await?;

   Ok((StatusCode::ACCEPTED, Json(todo)).into_response())
}

/// ToDo を完了にする
///
/// ## エンドポイント
/// PATCH /todos/{id}/done
pub async fn complete_todo(
   State(state): State<Arc<TodoState>>,
   Extension(CurrentUser(user)): Extension<CurrentUser>,
   Path(id): Path<String>,
) -> Result<Response, ApiError> {
   let todo = state.usecase.complete_todo(&user, &id).await?;

   Ok((StatusCode::ACCEPTED, Json(todo)).into_response())
}

/// ToDo を削除する
///
/// ## エンドポイント
/// DELETE /todos/{id}
pub async fn delete_todo(
   State(state): State<Arc<TodoState>>,
   Extension(CurrentUser(user)): Extension<CurrentUser>,
   Path(id): Path<String>,
) -> Result<Response, ApiError> {
   state.usecase.delete_todo(&user, &id).await?;

   Ok(StatusCode::NO_CONTENT.into_response())
}
