//! # ユーザーレジストリ
//!
//! 登録順を保持するユーザーの一覧。ユーザー名での検索と ID での検索を提供する。
//!
//! ## ロックの構成
//!
//! ```text
//! UserRegistry
//! └── RwLock<Vec<UserHandle>>      登録（書き込み）と検索（読み取り）
//!     └── UserEntry
//!         ├── id / username        不変のため、ロックなしで参照できる
//!         └── Mutex<User>          ToDo リストの読み取り・変更
//! ```
//!
//! ユーザー名の重複チェックと追加は同じ書き込みロック内で行うため、
//! 同じユーザー名での同時登録は片方だけが成功する。
//!
//! ロックは `tokio::sync` のものを使用する（ポイズニングがなく、
//! ガードを保持したまま `.await` できる）。

use std::sync::Arc;

use listo_domain::{
   DomainError,
   user::{User, UserId},
};
use tokio::sync::{Mutex, MutexGuard, RwLock};

/// レジストリに登録されたユーザー
///
/// `id` と `username` は作成後に変更されないため、ユーザー本体の
/// ロックとは別に保持し、検索時にロックを取らずに比較できるようにする。
#[derive(Debug)]
pub struct UserEntry {
   id:       UserId,
   username: Option<String>,
   user:     Mutex<User>,
}

/// ユーザーへの共有ハンドル
///
/// リクエストコンテキストに格納し、後続のハンドラで ToDo を操作する。
pub type UserHandle = Arc<UserEntry>;

impl UserEntry {
   fn new(user: User) -> Self {
      Self {
         id: *user.id(),
         username: user.username().map(str::to_string),
         user: Mutex::new(user),
      }
   }

   pub fn id(&self) -> &UserId {
      &self.id
   }

   pub fn username(&self) -> Option<&str> {
      self.username.as_deref()
   }

   /// ユーザー本体のロックを取得する
   ///
   /// 検索してから変更する一連の操作は、このガードを保持したまま行うこと。
   pub async fn lock(&self) -> MutexGuard<'_, User> {
      self.user.lock().await
   }
}

/// インメモリのユーザーレジストリ
#[derive(Debug, Default)]
pub struct UserRegistry {
   users: RwLock<Vec<UserHandle>>,
}

impl UserRegistry {
   pub fn new() -> Self {
      Self::default()
   }

   /// ユーザーを登録する
   ///
   /// 同じユーザー名（未指定同士を含む）が既に存在する場合は
   /// [`DomainError::UsernameTaken`] を返し、レジストリは変更しない。
   pub async fn register(
      &self,
      name: Option<String>,
      username: Option<String>,
   ) -> Result<User, DomainError> {
      let mut users = self.users.write().await;

      if users.iter().any(|entry| entry.username == username) {
         return Err(DomainError::UsernameTaken);
      }

      let user = User::new(name, username);
      users.push(Arc::new(UserEntry::new(user.clone())));

      tracing::debug!(user_id = %user.id(), total = users.len(), "ユーザーをレジストリに追加しました");
      Ok(user)
   }

   /// ユーザー名でユーザーを検索する
   pub async fn find_by_username(&self, username: &str) -> Option<UserHandle> {
      self
         .users
         .read()
         .await
         .iter()
         .find(|entry| entry.username() == Some(username))
         .cloned()
   }

   /// ID でユーザーを検索する
   pub async fn find_by_id(&self, id: &UserId) -> Option<UserHandle> {
      self
         .users
         .read()
         .await
         .iter()
         .find(|entry| entry.id() == id)
         .cloned()
   }

   /// 登録済みユーザー数
   pub async fn len(&self) -> usize {
      self.users.read().await.len()
   }

   pub async fn is_empty(&self) -> bool {
      self.users.read().await.is_empty()
   }
}
