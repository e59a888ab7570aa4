//! # ミドルウェア
//!
//! - [`identify`] - `username` ヘッダーによるユーザー特定

pub mod identify;

pub use identify::{CurrentUser, USERNAME_HEADER, identify_user};
