//! # アプリケーション設定
//!
//! 環境変数からアプリケーション設定を読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `LISTO_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `LISTO_PORT` | No | `3333` | ポート番号 |
//! | `LOG_FORMAT` | No | `pretty` | ログ出力形式（`json` / `pretty`） |
//! | `RUST_LOG` | No | `info,listo=debug,tower_http=debug` | ログレベル |
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use listo_api::config::AppConfig;
//!
//! // .env ファイルから読み込み（開発環境）
//! dotenvy::dotenv().ok();
//!
//! let config = AppConfig::from_env()?;
//! println!("サーバー: {}:{}", config.server.host, config.server.port);
//! ```

use std::env;

use listo_shared::observability::LogFormat;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3333;

/// 設定の読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
   /// ポート番号として解釈できない値
   #[error("LISTO_PORT は有効なポート番号である必要があります: {0:?}")]
   InvalidPort(String),
}

/// HTTP サーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
   /// バインドアドレス（例: `0.0.0.0`, `127.0.0.1`）
   pub host: String,
   /// ポート番号
   pub port: u16,
}

/// アプリケーション全体の設定
///
/// 起動時に一度だけ構築する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
   /// HTTP サーバー設定
   pub server:     ServerConfig,
   /// ログ出力形式
   pub log_format: LogFormat,
}

impl AppConfig {
   /// 環境変数から設定を読み込む
   ///
   /// 未設定の項目はデフォルト値を使用する。
   /// `LISTO_PORT` が数値として解釈できない場合はエラーを返す
   /// （誤設定のまま別ポートで起動しないようにする）。
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|key| env::var(key).ok())
   }

   /// 任意の参照関数から設定を読み込む
   fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let port = match lookup("LISTO_PORT") {
         Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
         None => DEFAULT_PORT,
      };

      Ok(Self {
         server:     ServerConfig {
            host: lookup("LISTO_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
         },
         log_format: lookup("LOG_FORMAT")
            .map(|raw| LogFormat::parse(&raw))
            .unwrap_or_default(),
      })
   }
}
