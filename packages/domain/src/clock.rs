//! # Clock（時刻プロバイダ）
//!
//! ToDo の `created_at` を決める現在時刻を抽象化する。
//! テストでは [`FixedClock`] を注入して時刻を固定する。

use chrono::{DateTime, Utc};

/// 現在時刻を提供するトレイト
pub trait Clock: Send + Sync {
   fn now(&self) -> DateTime<Utc>;
}

/// 実際のシステム時刻を返す実装
pub struct SystemClock;

impl Clock for SystemClock {
   fn now(&self) -> DateTime<Utc> {
      Utc::now()
   }
}

/// 固定時刻を返すテスト用実装
pub struct FixedClock {
   now: DateTime<Utc>,
}

impl FixedClock {
   pub fn new(now: DateTime<Utc>) -> Self {
      Self { now }
   }
}

impl Clock for FixedClock {
   fn now(&self) -> DateTime<Utc> {
      self.now
   }
}

#[cfg(test)]
mod tests {
   use chrono::TimeZone;

   use super::*;

   #[test]
   fn test_system_clock_は現在時刻を返す() {
      let clock = SystemClock;
      let before = Utc::now();
      let result = clock.now();
      let after = Utc::now();

      assert!(result >= before);
      assert!(result <= after);
   }

   #[test]
   fn test_fixed_clock_は何度呼んでもコンストラクタで渡した時刻を返す() {
      let fixed_time = Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap();
      let clock = FixedClock::new(fixed_time);

      assert_eq!(clock.now(), fixed_time);
      assert_eq!(clock.now(), fixed_time);
   }
}
