//! # エラーレスポンス
//!
//! すべてのエラーレスポンスは `{ "error": "<メッセージ>" }` の形式で返す。
//! 既存クライアントとの互換性のため、メッセージは英語の固定文言とする。

use serde::{Deserialize, Serialize};

/// エラーレスポンスのボディ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
   pub error: String,
}

impl ErrorBody {
   pub fn new(error: impl Into<String>) -> Self {
      Self {
         error: error.into(),
      }
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_errorフィールドのみを持つjsonにシリアライズされる() {
      let body = ErrorBody::new("User not found");

      let json = serde_json::to_value(&body).unwrap();

      assert_eq!(json, serde_json::json!({ "error": "User not found" }));
   }
}
