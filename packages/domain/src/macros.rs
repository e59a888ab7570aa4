/// UUID v7 ベースの ID 型を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`Uuid` をラップ）
/// - `derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Display)`
/// - `new()`: UUID v7 を生成
/// - `parse_str()`: 正規の文字列表現（パスパラメータなど）から復元
/// - `Default` impl（`new()` に委譲）
///
/// # 使用例
///
/// ```rust
/// use listo_domain::todo::TodoId;
///
/// let id = TodoId::new();
/// let restored = TodoId::parse_str(&id.to_string()).unwrap();
/// assert_eq!(id, restored);
///
/// // 同じ UUID でも大文字表記は別の値として扱う
/// assert_eq!(TodoId::parse_str(&id.to_string().to_uppercase()), None);
/// ```
macro_rules! define_uuid_id {
   (
      $(#[$meta:meta])*
      $vis:vis struct $Name:ident;
   ) => {
      $(#[$meta])*
      #[derive(
         Debug, Clone, Copy, PartialEq, Eq, Hash,
         serde::Serialize,
         derive_more::Display,
      )]
      #[display("{_0}")]
      $vis struct $Name(uuid::Uuid);

      impl $Name {
         /// 新しい ID を生成する（UUID v7）
         pub fn new() -> Self {
            Self(uuid::Uuid::now_v7())
         }

         /// 小文字・ハイフン区切りの文字列表現から ID を復元する
         ///
         /// ID は不透明な文字列として扱うため、大文字、ハイフンなし、
         /// `urn:uuid:` 付きなど同じ UUID の別表記は `None` になる。
         pub fn parse_str(value: &str) -> Option<Self> {
            uuid::Uuid::parse_str(value)
               .ok()
               .map(Self)
               .filter(|id| id.to_string() == value)
         }
      }

      impl Default for $Name {
         fn default() -> Self {
            Self::new()
         }
      }
   };
}
