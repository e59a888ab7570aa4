//! # Listo API サーバー
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `LISTO_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `LISTO_PORT` | No | ポート番号（デフォルト: `3333`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run --bin listo-api
//!
//! # 本番環境
//! LISTO_PORT=8080 LOG_FORMAT=json cargo run --bin listo-api --release
//! ```
//!
//! データはメモリ上にのみ保持され、プロセスの終了とともに失われる。

use std::sync::Arc;

use listo_api::{app::build_app, config::AppConfig};
use listo_domain::clock::SystemClock;
use listo_infra::UserRegistry;
use listo_shared::observability::init_tracing;
use tokio::net::TcpListener;

/// サーバーのエントリーポイント
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. アプリケーション設定の読み込み
/// 3. トレーシングの初期化
/// 4. レジストリとルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   let config = AppConfig::from_env()?;

   init_tracing(config.log_format);

   tracing::info!(
      "Listo API サーバーを起動します: {}:{}",
      config.server.host,
      config.server.port
   );

   // レジストリはプロセス全体で一つだけ構築し、ハンドラへは Arc で渡す
   let registry = Arc::new(UserRegistry::new());
   let app = build_app(registry, Arc::new(SystemClock));

   let listener = TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
   tracing::info!("Listo API サーバーが起動しました: {}", listener.local_addr()?);

   axum::serve(listener, app).await?;

   Ok(())
}
