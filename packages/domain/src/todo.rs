//! # ToDo
//!
//! ユーザーが所有する ToDo と、その並び順を保持する [`TodoList`] を定義する。
//!
//! ## 不変条件
//!
//! - `id` と `created_at` は作成後に変更されない
//! - `done` は `false → true` の一方向にのみ遷移する（未完了に戻す操作はない）
//! - [`TodoList`] は挿入順を保持し、削除しても残りの要素の相対順序は変わらない
//! - ToDo は単一の [`TodoList`] に属し、他のユーザーと共有されない

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{DomainError, timestamp};

define_uuid_id! {
   /// ToDo の一意識別子
   pub struct TodoId;
}

/// ToDo の作成・更新で受け取る入力値
///
/// `title` と `deadline` の両方が存在し、空文字列でないことを保証する。
/// 期限のパースは [`TodoList`] の操作時に行う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoFields {
   title:    String,
   deadline: String,
}

impl TodoFields {
   /// 入力値の存在チェックを行う
   ///
   /// どちらかが `None` または空文字列の場合は [`DomainError::MissingFields`]。
   pub fn new(title: Option<String>, deadline: Option<String>) -> Result<Self, DomainError> {
      match (title, deadline) {
         (Some(title), Some(deadline)) if !title.is_empty() && !deadline.is_empty() => {
            Ok(Self { title, deadline })
         }
         _ => Err(DomainError::MissingFields),
      }
   }

   pub fn title(&self) -> &str {
      &self.title
   }

   pub fn deadline(&self) -> &str {
      &self.deadline
   }
}

/// ToDo エンティティ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
   id:         TodoId,
   title:      String,
   done:       bool,
   #[serde(serialize_with = "timestamp::serialize")]
   deadline:   DateTime<Utc>,
   #[serde(serialize_with = "timestamp::serialize")]
   created_at: DateTime<Utc>,
}

impl Todo {
   /// 新しい ToDo を作成する（未完了）
   pub fn new(title: String, deadline: DateTime<Utc>, now: DateTime<Utc>) -> Self {
      Self {
         id: TodoId::new(),
         title,
         done: false,
         deadline,
         created_at: now,
      }
   }

   pub fn id(&self) -> &TodoId {
      &self.id
   }

   pub fn title(&self) -> &str {
      &self.title
   }

   pub fn is_done(&self) -> bool {
      self.done
   }

   pub fn deadline(&self) -> DateTime<Utc> {
      self.deadline
   }

   pub fn created_at(&self) -> DateTime<Utc> {
      self.created_at
   }

   fn complete(&mut self) {
      self.done = true;
   }
}

/// ユーザーごとの ToDo リスト
///
/// 挿入順を保持する `Vec` のラッパー。検索は線形走査で行う。
/// JSON では素の配列としてシリアライズされる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TodoList(Vec<Todo>);

impl TodoList {
   pub fn new() -> Self {
      Self::default()
   }

   /// 格納順のスライスを取得する
   pub fn as_slice(&self) -> &[Todo] {
      &self.0
   }

   pub fn len(&self) -> usize {
      self.0.len()
   }

   pub fn is_empty(&self) -> bool {
      self.0.is_empty()
   }

   pub fn find(&self, id: &TodoId) -> Option<&Todo> {
      self.0.iter().find(|todo| todo.id == *id)
   }

   /// ToDo を作成して末尾に追加する
   ///
   /// 期限をパースできない場合はリストを変更せずにエラーを返す。
   pub fn add(&mut self, fields: TodoFields, now: DateTime<Utc>) -> Result<Todo, DomainError> {
      let deadline = timestamp::parse_deadline(&fields.deadline)?;
      let todo = Todo::new(fields.title, deadline, now);
      self.0.push(todo.clone());
      Ok(todo)
   }

   /// `title` と `deadline` を上書きする
   ///
   /// `id`、`done`、`created_at` は変更しない。ToDo の検索を先に行い、
   /// 見つかった場合のみ期限をパースする。どちらかが失敗した場合は何も変更しない。
   pub fn update(&mut self, id: &TodoId, fields: TodoFields) -> Result<&Todo, DomainError> {
      let todo = self.find_mut(id)?;
      let deadline = timestamp::parse_deadline(&fields.deadline)?;

      todo.title = fields.title;
      todo.deadline = deadline;
      Ok(todo)
   }

   /// ToDo を完了にする（冪等）
   pub fn complete(&mut self, id: &TodoId) -> Result<&Todo, DomainError> {
      let todo = self.find_mut(id)?;
      todo.complete();
      Ok(todo)
   }

   /// ToDo を取り除き、取り除いた要素を返す
   pub fn remove(&mut self, id: &TodoId) -> Result<Todo, DomainError> {
      let position = self
         .0
         .iter()
         .position(|todo| todo.id == *id)
         .ok_or_else(|| not_found(id))?;
      Ok(self.0.remove(position))
   }

   fn find_mut(&mut self, id: &TodoId) -> Result<&mut Todo, DomainError> {
      self
         .0
         .iter_mut()
         .find(|todo| todo.id == *id)
         .ok_or_else(|| not_found(id))
   }
}

fn not_found(id: &TodoId) -> DomainError {
   DomainError::TodoNotFound { id: id.to_string() }
}
