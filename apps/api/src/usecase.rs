//! # ユースケース層
//!
//! ハンドラから呼ばれるアプリケーションロジック。
//!
//! - [`user`] - ユーザー登録
//! - [`todo`] - 特定済みユーザーに対する ToDo 操作

pub mod todo;
pub mod user;

pub use todo::TodoUseCase;
pub use user::{CreateUserInput, UserUseCase};
