//! # ToDo ユースケース
//!
//! ユーザー特定ミドルウェアで解決済みのユーザーに対して ToDo を操作する。
//!
//! 検索してから変更する一連の処理は、すべてユーザーのロックを保持したまま行う。
//! パスパラメータの ID が正規の UUID 表記でない場合は、存在しない ID と同様に
//! [`DomainError::TodoNotFound`] を返す。

use std::sync::Arc;

use listo_domain::{
   DomainError,
   clock::Clock,
   todo::{Todo, TodoFields, TodoId},
};
use listo_infra::UserEntry;

/// ToDo 関連のユースケース
pub struct TodoUseCase {
   clock: Arc<dyn Clock>,
}

impl TodoUseCase {
   pub fn new(clock: Arc<dyn Clock>) -> Self {
      Self { clock }
   }

   /// ToDo 一覧を格納順に取得する
   pub async fn list_todos(&self, user: &UserEntry) -> Vec<Todo> {
      user.lock().await.todos().as_slice().to_vec()
   }

   /// ToDo を作成してリストの末尾に追加する
   pub async fn create_todo(
      &self,
      user: &UserEntry,
      fields: TodoFields,
   ) -> Result<Todo, DomainError> {
      let now = self.clock.now();
      let todo = user.lock().await.todos_mut().add(fields, now)?;

      tracing::info!(user_id = %user.id(), todo_id = %todo.id(), "ToDo を作成しました");
      Ok(todo)
   }

   /// ToDo の `title` と `deadline` を更新する
   pub async fn update_todo(
      &self,
      user: &UserEntry,
      raw_id: &str,
      fields: TodoFields,
   ) -> Result<Todo, DomainError> {
      let id = parse_todo_id(raw_id)?;
      let todo = user.lock().await.todos_mut().update(&id, fields)?.clone();

      tracing::info!(user_id = %user.id(), todo_id = %id, "ToDo を更新しました");
      Ok(todo)
   }

   /// ToDo を完了にする（冪等）
   pub async fn complete_todo(&self, user: &UserEntry, raw_id: &str) -> Result<Todo, DomainError> {
      let id = parse_todo_id(raw_id)?;
      let todo = user.lock().await.todos_mut().complete(&id)?.clone();

      tracing::info!(user_id = %user.id(), todo_id = %id, "ToDo を完了にしました");
      Ok(todo)
   }

   /// ToDo を削除する
   pub async fn delete_todo(&self, user: &UserEntry, raw_id: &str) -> Result<(), DomainError> {
      let id = parse_todo_id(raw_id)?;
      user.lock().await.todos_mut().remove(&id)?;

      tracing::info!(user_id = %user.id(), todo_id = %id, "ToDo を削除しました");
      Ok(())
   }
}

fn parse_todo_id(raw_id: &str) -> Result<TodoId, DomainError> {
   TodoId::parse_str(raw_id).ok_or_else(|| DomainError::TodoNotFound {
      id: raw_id.to_string(),
   })
}

#[cfg(test)]
mod tests {
   use chrono::{TimeZone, Utc};
   use listo_domain::clock::FixedClock;
   use listo_infra::{UserHandle, UserRegistry};
   use pretty_assertions::assert_eq;

   use super::*;

   async fn setup() -> (TodoUseCase, UserHandle) {
      let registry = UserRegistry::new();
      registry
         .register(Some("Alice".to_string()), Some("alice".to_string()))
         .await
         .unwrap();
      let user = registry.find_by_username("alice").await.unwrap();
      let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap());
      (TodoUseCase::new(Arc::new(clock)), user)
   }

   fn fields(title: &str, deadline: &str) -> TodoFields {
      TodoFields::new(Some(title.to_string()), Some(deadline.to_string())).unwrap()
   }

   #[tokio::test]
   async fn test_create_todo_はclockの時刻をcreated_atに使う() {
      let (sut, user) = setup().await;

      let todo = sut
         .create_todo(&user, fields("Buy milk", "2024-01-02"))
         .await
         .unwrap();

      assert_eq!(
         todo.created_at(),
         Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
      );
      assert_eq!(sut.list_todos(&user).await, vec![todo]);
   }

   #[tokio::test]
   async fn test_uuidでないidはtodo_not_foundになる() {
      let (sut, user) = setup().await;

      let result = sut.complete_todo(&user, "not-a-uuid").await;

      assert_eq!(
         result,
         Err(DomainError::TodoNotFound {
            id: "not-a-uuid".to_string(),
         })
      );
   }

   #[tokio::test]
   async fn test_別表記のidでは既存のtodoに一致しない() {
      let (sut, user) = setup().await;
      let todo = sut
         .create_todo(&user, fields("Buy milk", "2024-01-02"))
         .await
         .unwrap();
      let simple = todo.id().to_string().replace('-', "");

      let result = sut.complete_todo(&user, &simple).await;

      assert_eq!(result, Err(DomainError::TodoNotFound { id: simple }));
      assert!(!sut.list_todos(&user).await[0].is_done());
   }

   #[tokio::test]
   async fn test_delete_todo_は一覧から取り除く() {
      let (sut, user) = setup().await;
      let first = sut.create_todo(&user, fields("a", "2024-01-02")).await.unwrap();
      let second = sut.create_todo(&user, fields("b", "2024-01-03")).await.unwrap();

      sut.delete_todo(&user, &first.id().to_string()).await.unwrap();

      assert_eq!(sut.list_todos(&user).await, vec![second]);
   }

   #[tokio::test]
   async fn test_update_todo_は更新後の値を返す() {
      let (sut, user) = setup().await;
      let todo = sut.create_todo(&user, fields("a", "2024-01-02")).await.unwrap();

      let updated = sut
         .update_todo(&user, &todo.id().to_string(), fields("b", "2024-02-01"))
         .await
         .unwrap();

      assert_eq!(updated.title(), "b");
      assert_eq!(sut.list_todos(&user).await, vec![updated]);
   }
}
