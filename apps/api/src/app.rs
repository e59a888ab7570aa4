//! # アプリケーションの組み立て
//!
//! ルーター、State、ミドルウェア、レイヤーを組み立てる。
//! `main` と結合テストの両方から同じ構成を使う。

use std::sync::Arc;

use axum::{
   Router,
   middleware::from_fn_with_state,
   routing::{get, patch, post, put},
};
use listo_domain::clock::Clock;
use listo_infra::UserRegistry;
use listo_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
   cors::CorsLayer,
   request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
   trace::TraceLayer,
};

use crate::{
   handler::{
      TodoState,
      UserState,
      complete_todo,
      create_todo,
      create_user,
      delete_todo,
      health_check,
      list_todos,
      update_todo,
   },
   middleware::identify_user,
   usecase::{TodoUseCase, UserUseCase},
};

/// ルーターを構築する
///
/// `registry` はプロセス全体で共有するユーザーレジストリ、
/// `clock` は ToDo の `created_at` に使う時刻プロバイダ。
pub fn build_app(registry: Arc<UserRegistry>, clock: Arc<dyn Clock>) -> Router {
   let user_state = Arc::new(UserState {
      usecase: UserUseCase::new(Arc::clone(&registry)),
   });
   let todo_state = Arc::new(TodoState {
      usecase: TodoUseCase::new(clock),
   });

   let user_routes = Router::new()
      .route("/users", post(create_user))
      .with_state(user_state);

   // ToDo API（ユーザー特定ミドルウェアを適用）
   let todo_routes = Router::new()
      .route("/todos", get(list_todos).post(create_todo))
      .route("/todos/{id}", put(update_todo).delete(delete_todo))
      .route("/todos/{id}/done", patch(complete_todo))
      .route_layer(from_fn_with_state(registry, identify_user))
      .with_state(todo_state);

   Router::new()
      .route("/health", get(health_check))
      .merge(user_routes)
      .merge(todo_routes)
      // レイヤー順序: 下に書いたものが外側
      // 1. SetRequestIdLayer（最外）: x-request-id を生成（クライアント提供値があればそれを使用）
      // 2. TraceLayer: request_id を含むスパンで全ログを囲む
      // 3. PropagateRequestIdLayer: レスポンスヘッダーに x-request-id をコピー
      // 4. CorsLayer: オリジン制限なし
      .layer(CorsLayer::permissive())
      .layer(PropagateRequestIdLayer::x_request_id())
      .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
      .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
