//! # Request ID レイヤーのテスト
//!
//! - レスポンスに `x-request-id` ヘッダーが含まれる
//! - クライアント提供の `x-request-id` がそのまま返される
//! - 自動生成の `x-request-id` が UUID v7 形式である

use std::sync::Arc;

use axum::{
   Router,
   body::Body,
   http::{Request, StatusCode},
};
use listo_api::app::build_app;
use listo_domain::clock::SystemClock;
use listo_infra::UserRegistry;
use pretty_assertions::assert_eq;
use tower::ServiceExt;

fn test_app() -> Router {
   build_app(Arc::new(UserRegistry::new()), Arc::new(SystemClock))
}

#[tokio::test]
async fn test_自動生成のx_request_idはuuid_v7() {
   let response = test_app()
      .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
      .await
      .unwrap();

   assert_eq!(response.status(), StatusCode::OK);
   let request_id = response
      .headers()
      .get("x-request-id")
      .expect("レスポンスに x-request-id ヘッダーが含まれること")
      .to_str()
      .unwrap();
   let uuid = uuid::Uuid::parse_str(request_id).unwrap();
   assert_eq!(uuid.get_version_num(), 7);
}

#[tokio::test]
async fn test_クライアント提供のx_request_idがそのまま返される() {
   let custom_id = "client-provided-request-id-123";

   let response = test_app()
      .oneshot(
         Request::builder()
            .uri("/health")
            .header("x-request-id", custom_id)
            .body(Body::empty())
            .unwrap(),
      )
      .await
      .unwrap();

   assert_eq!(
      response
         .headers()
         .get("x-request-id")
         .unwrap()
         .to_str()
         .unwrap(),
      custom_id
   );
}

#[tokio::test]
async fn test_エラーレスポンスにもx_request_idが付与される() {
   let response = test_app()
      .oneshot(Request::builder().uri("/todos").body(Body::empty()).unwrap())
      .await
      .unwrap();

   assert_eq!(response.status(), StatusCode::BAD_REQUEST);
   assert!(response.headers().contains_key("x-request-id"));
}
