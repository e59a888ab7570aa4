//! # タイムスタンプ
//!
//! ToDo の期限文字列のパースと、タイムスタンプの JSON 表現を扱う。
//!
//! ## 期限のパース方針
//!
//! 作成時・更新時のどちらでも期限は必ずパースし、UTC のタイムスタンプとして保持する。
//! 受け付ける表現（先に一致したものを採用）:
//!
//! | 形式 | 例 | 解釈 |
//! |------|----|------|
//! | RFC 3339 | `2024-01-01T10:00:00+09:00` | オフセットを考慮して UTC に変換 |
//! | 日時（オフセットなし） | `2024-01-01T10:00:00.250`, `2024/01/01 10:00` | UTC として解釈 |
//! | 日付のみ | `2024-01-01`, `2024/01/01` | UTC の 0 時 |
//!
//! 自然言語の日付（`Jan 1, 2024` など）は受け付けない。
//!
//! ## JSON 表現
//!
//! ミリ秒精度の RFC 3339（`Z` 終端）で出力する: `2024-01-01T00:00:00.000Z`

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde::Serializer;

use crate::DomainError;

/// オフセットなし日時として受け付けるフォーマット
const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
   "%Y-%m-%dT%H:%M:%S%.f",
   "%Y-%m-%d %H:%M:%S%.f",
   "%Y-%m-%dT%H:%M",
   "%Y-%m-%d %H:%M",
   "%Y/%m/%d %H:%M:%S%.f",
   "%Y/%m/%d %H:%M",
];

/// 日付のみとして受け付けるフォーマット
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// 期限の文字列を UTC タイムスタンプに変換する
///
/// 前後の空白は無視する。どの形式にも一致しない場合は
/// [`DomainError::InvalidDeadline`] を返す。
pub fn parse_deadline(raw: &str) -> Result<DateTime<Utc>, DomainError> {
   let value = raw.trim();

   if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
      return Ok(parsed.with_timezone(&Utc));
   }

   if let Some(parsed) = NAIVE_DATE_TIME_FORMATS
      .iter()
      .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
   {
      return Ok(parsed.and_utc());
   }

   DATE_FORMATS
      .iter()
      .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
      .map(|date| date.and_time(NaiveTime::MIN).and_utc())
      .ok_or_else(|| DomainError::InvalidDeadline(raw.to_string()))
}

/// タイムスタンプをミリ秒精度の RFC 3339 文字列に変換する
pub fn format(timestamp: &DateTime<Utc>) -> String {
   timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `#[serde(serialize_with = "...")]` 用のシリアライザ
pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
   S: Serializer,
{
   serializer.serialize_str(&format(timestamp))
}

#[cfg(test)]
mod tests {
   use chrono::TimeZone;
   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   #[rstest]
   #[case::日付のみ("2024-01-01", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())]
   #[case::utc("2024-01-01T10:30:00Z", Utc.with_ymd_and_hms(2024, 1, 1, 10, 30, 0).unwrap())]
   #[case::オフセット付き(
      "2024-01-01T09:00:00+09:00",
      Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
   )]
   #[case::オフセットなし("2024-03-15T08:15:00", Utc.with_ymd_and_hms(2024, 3, 15, 8, 15, 0).unwrap())]
   #[case::空白区切り("2024-03-15 08:15", Utc.with_ymd_and_hms(2024, 3, 15, 8, 15, 0).unwrap())]
   #[case::スラッシュ区切りの日付("2024/01/01", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())]
   #[case::スラッシュ区切りの日時(
      "2024/03/15 08:15:30",
      Utc.with_ymd_and_hms(2024, 3, 15, 8, 15, 30).unwrap()
   )]
   #[case::前後の空白("  2024-01-01  ", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())]
   fn test_parse_deadline_は受け付ける形式をutcに変換する(
      #[case] raw: &str,
      #[case] expected: DateTime<Utc>,
   ) {
      assert_eq!(parse_deadline(raw), Ok(expected));
   }

   #[test]
   fn test_parse_deadline_はミリ秒を保持する() {
      let parsed = parse_deadline("2024-01-01T10:00:00.250").unwrap();

      assert_eq!(format(&parsed), "2024-01-01T10:00:00.250Z");
   }

   #[rstest]
   #[case("tomorrow")]
   #[case("2024-13-01")]
   #[case("2024/13/01")]
   #[case("Jan 1, 2024")]
   #[case("   ")]
   fn test_parse_deadline_は解釈できない値をエラーにする(#[case] raw: &str) {
      assert_eq!(
         parse_deadline(raw),
         Err(DomainError::InvalidDeadline(raw.to_string()))
      );
   }

   #[test]
   fn test_format_はミリ秒精度のz終端で出力する() {
      let timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

      assert_eq!(format(&timestamp), "2024-01-01T00:00:00.000Z");
   }
}
