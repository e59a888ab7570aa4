//! # ユーザー登録ユースケース

use std::sync::Arc;

use listo_domain::{DomainError, user::User};
use listo_infra::UserRegistry;

/// ユーザー登録の入力
///
/// どちらも省略可能。省略された値はそのまま未設定として保存する。
#[derive(Debug, Clone, Default)]
pub struct CreateUserInput {
   pub name:     Option<String>,
   pub username: Option<String>,
}

/// ユーザー関連のユースケース
pub struct UserUseCase {
   registry: Arc<UserRegistry>,
}

impl UserUseCase {
   pub fn new(registry: Arc<UserRegistry>) -> Self {
      Self { registry }
   }

   /// ユーザーを登録する
   ///
   /// ユーザー名が既に使われている場合は [`DomainError::UsernameTaken`]。
   pub async fn create_user(&self, input: CreateUserInput) -> Result<User, DomainError> {
      let user = self.registry.register(input.name, input.username).await?;

      tracing::info!(user_id = %user.id(), "ユーザーを登録しました");
      Ok(user)
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[tokio::test]
   async fn test_create_user_は重複したユーザー名を拒否する() {
      let registry = Arc::new(UserRegistry::new());
      let sut = UserUseCase::new(Arc::clone(&registry));
      let input = CreateUserInput {
         name:     Some("Alice".to_string()),
         username: Some("alice".to_string()),
      };
      sut.create_user(input.clone()).await.unwrap();

      let result = sut.create_user(input).await;

      assert_eq!(result, Err(DomainError::UsernameTaken));
      assert_eq!(registry.len().await, 1);
   }
}
