//! # ユーザー
//!
//! ToDo リストの所有者。`username` が唯一の識別手段となる。
//!
//! `name` と `username` は作成時にのみ設定され、以後変更する操作は存在しない。
//! どちらも省略可能で、省略された値は JSON 出力から除外される。

use serde::Serialize;

use crate::todo::TodoList;

define_uuid_id! {
   /// ユーザーの一意識別子
   pub struct UserId;
}

/// ユーザーエンティティ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
   id:       UserId,
   #[serde(skip_serializing_if = "Option::is_none")]
   name:     Option<String>,
   #[serde(skip_serializing_if = "Option::is_none")]
   username: Option<String>,
   todos:    TodoList,
}

impl User {
   /// 空の ToDo リストを持つユーザーを作成する
   ///
   /// ユーザー名の一意性はレジストリへの登録時に検証する。
   pub fn new(name: Option<String>, username: Option<String>) -> Self {
      Self {
         id: UserId::new(),
         name,
         username,
         todos: TodoList::new(),
      }
   }

   pub fn id(&self) -> &UserId {
      &self.id
   }

   pub fn name(&self) -> Option<&str> {
      self.name.as_deref()
   }

   pub fn username(&self) -> Option<&str> {
      self.username.as_deref()
   }

   pub fn todos(&self) -> &TodoList {
      &self.todos
   }

   pub fn todos_mut(&mut self) -> &mut TodoList {
      &mut self.todos
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::{assert_eq, assert_ne};
   use serde_json::json;

   use super::*;

   #[test]
   fn test_new_は空のtodoリストで作成される() {
      let user = User::new(Some("Alice".to_string()), Some("alice".to_string()));

      assert_eq!(user.name(), Some("Alice"));
      assert_eq!(user.username(), Some("alice"));
      assert!(user.todos().is_empty());
   }

   #[test]
   fn test_new_は毎回異なるidを割り当てる() {
      let first = User::new(None, Some("a".to_string()));
      let second = User::new(None, Some("b".to_string()));

      assert_ne!(first.id(), second.id());
   }

   #[test]
   fn test_user_のjson表現() {
      let user = User::new(Some("Alice".to_string()), Some("alice".to_string()));

      let json = serde_json::to_value(&user).unwrap();

      assert_eq!(
         json,
         json!({
            "id": user.id().to_string(),
            "name": "Alice",
            "username": "alice",
            "todos": [],
         })
      );
   }

   #[test]
   fn test_省略された項目はjsonに含まれない() {
      let user = User::new(None, Some("alice".to_string()));

      let json = serde_json::to_value(&user).unwrap();

      assert!(json.get("name").is_none());
      assert_eq!(json["username"], "alice");
   }
}
