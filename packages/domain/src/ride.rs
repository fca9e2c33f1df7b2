//! # 配車記録
//!
//! 1 回の配車の出発地・目的地と、乗客・運転手・車両を記録するエンティティ。
//!
//! ## ライフサイクル
//!
//! ```text
//! RideDraft ──validate()──▶ NewRide ──insert──▶ Ride
//! (未検証の入力)            (検証済み)          (永続化済み、ID 採番済み)
//! ```
//!
//! - 作成は検証成功後の挿入のみ。更新・削除は行わない
//! - `RideId` と作成日時はストアが一度だけ割り当てる。呼び出し側は指定できない
//!
//! ## 設計判断
//!
//! ### 識別子を整数の Newtype にする
//!
//! ストアの自動採番値をそのまま使うが、`RideId` でラップして
//! ページ番号など他の整数との取り違えをコンパイラに検出させる。

mod draft;

use std::{fmt, num::IntErrorKind, ops::RangeInclusive};

use chrono::NaiveDateTime;
pub use draft::RideDraft;

use crate::error::ValidationError;

/// 緯度の有効範囲（度）
const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;

/// 経度の有効範囲（度）
const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

// =============================================================================
// RideId
// =============================================================================

/// 配車記録の一意識別子
///
/// ストアが挿入時に採番する整数。挿入順に単調増加する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RideId(i64);

impl RideId {
   /// ストアから取得した値から ID を復元する
   pub fn from_i64(value: i64) -> Self {
      Self(value)
   }

   /// パスパラメータなどの文字列から ID を解析する
   ///
   /// 10 進整数として解釈できない場合は [`ValidationError::InvalidRideId`] を返す。
   /// 整数だが `i64` に収まらない場合は、ストアが採番し得ない値のため
   /// `Ok(None)` を返す（呼び出し側では「該当なし」として扱う）。
   ///
   /// ```rust
   /// use ridebook_domain::{ValidationError, ride::RideId};
   ///
   /// assert_eq!(RideId::parse("42").unwrap().map(|id| id.as_i64()), Some(42));
   /// assert_eq!(RideId::parse("99999999999999999999"), Ok(None));
   /// assert_eq!(RideId::parse("abc"), Err(ValidationError::InvalidRideId));
   /// ```
   pub fn parse(value: &str) -> Result<Option<Self>, ValidationError> {
      match value.trim().parse::<i64>() {
         Ok(id) => Ok(Some(Self(id))),
         Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(None)
         }
         Err(_) => Err(ValidationError::InvalidRideId),
      }
   }

   /// 内部の整数値を取得する
   pub fn as_i64(&self) -> i64 {
      self.0
   }
}

impl fmt::Display for RideId {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "{}", self.0)
   }
}

// =============================================================================
// GeoPoint
// =============================================================================

/// 地点（緯度・経度）
///
/// 緯度は [-90, 90]、経度は [-180, 180] の範囲にあることを保証する。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
   latitude:  f64,
   longitude: f64,
}

impl GeoPoint {
   /// 範囲内であれば地点を作成する
   ///
   /// NaN は範囲比較で常に偽となるため、範囲外として扱われる。
   pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
      (LATITUDE_RANGE.contains(&latitude) && LONGITUDE_RANGE.contains(&longitude)).then_some(
         Self {
            latitude,
            longitude,
         },
      )
   }

   pub fn latitude(&self) -> f64 {
      self.latitude
   }

   pub fn longitude(&self) -> f64 {
      self.longitude
   }
}

// =============================================================================
// NewRide
// =============================================================================

/// 検証済みの配車記録作成リクエスト
///
/// [`RideDraft::validate`] からのみ生成される。
/// このため、保持する値はすべての不変条件を満たしている。
#[derive(Debug, Clone, PartialEq)]
pub struct NewRide {
   start:          GeoPoint,
   end:            GeoPoint,
   rider_name:     String,
   driver_name:    String,
   driver_vehicle: String,
}

impl NewRide {
   pub fn start(&self) -> GeoPoint {
      self.start
   }

   pub fn end(&self) -> GeoPoint {
      self.end
   }

   pub fn rider_name(&self) -> &str {
      &self.rider_name
   }

   pub fn driver_name(&self) -> &str {
      &self.driver_name
   }

   pub fn driver_vehicle(&self) -> &str {
      &self.driver_vehicle
   }
}

// =============================================================================
// Ride
// =============================================================================

/// 永続化済みの配車記録
#[derive(Debug, Clone, PartialEq)]
pub struct Ride {
   id:      RideId,
   ride:    NewRide,
   created: NaiveDateTime,
}

impl Ride {
   /// ストアから取得した値で配車記録を復元する
   ///
   /// 作成時の検証済みの値と、ストアが割り当てた ID・作成日時を組み合わせる。
   pub fn from_db(id: RideId, ride: NewRide, created: NaiveDateTime) -> Self {
      Self { id, ride, created }
   }

   /// ストアから取得した生の値で配車記録を復元する
   ///
   /// 座標が範囲外、または名前・車両が空文字列の場合（外部からの直接書き込みなど）は
   /// `None` を返す。
   pub fn restore(id: RideId, row: RestoredRide, created: NaiveDateTime) -> Option<Self> {
      let non_empty = |text: String| (!text.is_empty()).then_some(text);
      let ride = NewRide {
         start:          GeoPoint::new(row.start_lat, row.start_long)?,
         end:            GeoPoint::new(row.end_lat, row.end_long)?,
         rider_name:     non_empty(row.rider_name)?,
         driver_name:    non_empty(row.driver_name)?,
         driver_vehicle: non_empty(row.driver_vehicle)?,
      };
      Some(Self::from_db(id, ride, created))
   }

   pub fn id(&self) -> RideId {
      self.id
   }

   pub fn start(&self) -> GeoPoint {
      self.ride.start
   }

   pub fn end(&self) -> GeoPoint {
      self.ride.end
   }

   pub fn rider_name(&self) -> &str {
      &self.ride.rider_name
   }

   pub fn driver_name(&self) -> &str {
      &self.ride.driver_name
   }

   pub fn driver_vehicle(&self) -> &str {
      &self.ride.driver_vehicle
   }

   pub fn created(&self) -> NaiveDateTime {
      self.created
   }
}

/// ストアの行から復元する際の生の値
///
/// [`Ride::restore`] の引数。
#[derive(Debug, Clone)]
pub struct RestoredRide {
   pub start_lat:      f64,
   pub start_long:     f64,
   pub end_lat:        f64,
   pub end_long:       f64,
   pub rider_name:     String,
   pub driver_name:    String,
   pub driver_vehicle: String,
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   #[rstest]
   #[case("1", 1)]
   #[case("42", 42)]
   #[case(" 7 ", 7)]
   #[case("-3", -3)]
   fn test_parse_整数文字列からidを解析できる(#[case] input: &str, #[case] expected: i64) {
      assert_eq!(RideId::parse(input), Ok(Some(RideId::from_i64(expected))));
   }

   #[rstest]
   #[case("9223372036854775808")]
   #[case("99999999999999999999")]
   #[case("-9223372036854775809")]
   fn test_parse_i64に収まらない整数はnoneを返す(#[case] input: &str) {
      assert_eq!(RideId::parse(input), Ok(None));
   }

   #[rstest]
   #[case("abc")]
   #[case("")]
   #[case("1.5")]
   #[case("1; DROP TABLE Rides")]
   fn test_parse_整数でない文字列はinvalid_ride_idを返す(#[case] input: &str) {
      assert_eq!(RideId::parse(input), Err(ValidationError::InvalidRideId));
   }

   #[rstest]
   #[case(90.0, 180.0)]
   #[case(-90.0, -180.0)]
   #[case(0.0, 0.0)]
   fn test_geo_point_境界値は範囲内として受け付ける(#[case] lat: f64, #[case] long: f64) {
      assert!(GeoPoint::new(lat, long).is_some());
   }

   #[rstest]
   #[case(90.1, 0.0)]
   #[case(-90.1, 0.0)]
   #[case(0.0, 180.1)]
   #[case(0.0, -180.1)]
   #[case(f64::NAN, 0.0)]
   fn test_geo_point_範囲外はnoneを返す(#[case] lat: f64, #[case] long: f64) {
      assert!(GeoPoint::new(lat, long).is_none());
   }

   #[test]
   fn test_restore_保存値が範囲外ならnoneを返す() {
      let row = RestoredRide {
         start_lat:      100.0,
         start_long:     0.0,
         end_lat:        0.0,
         end_long:       0.0,
         rider_name:     "A".to_string(),
         driver_name:    "B".to_string(),
         driver_vehicle: "C".to_string(),
      };

      assert!(Ride::restore(RideId::from_i64(1), row, NaiveDateTime::default()).is_none());
   }

   #[rstest]
   #[case("", "B", "C")]
   #[case("A", "", "C")]
   #[case("A", "B", "")]
   fn test_restore_保存値の名前が空ならnoneを返す(
      #[case] rider_name: &str,
      #[case] driver_name: &str,
      #[case] driver_vehicle: &str,
   ) {
      let row = RestoredRide {
         start_lat:      10.0,
         start_long:     20.0,
         end_lat:        30.0,
         end_long:       40.0,
         rider_name:     rider_name.to_string(),
         driver_name:    driver_name.to_string(),
         driver_vehicle: driver_vehicle.to_string(),
      };

      assert!(Ride::restore(RideId::from_i64(1), row, NaiveDateTime::default()).is_none());
   }

   #[test]
   fn test_restore_保存値から配車記録を復元できる() {
      let row = RestoredRide {
         start_lat:      10.0,
         start_long:     20.0,
         end_lat:        30.0,
         end_long:       40.0,
         rider_name:     "A".to_string(),
         driver_name:    "B".to_string(),
         driver_vehicle: "C".to_string(),
      };

      let ride = Ride::restore(RideId::from_i64(3), row, NaiveDateTime::default()).unwrap();

      assert_eq!(ride.id(), RideId::from_i64(3));
      assert_eq!(ride.start(), GeoPoint::new(10.0, 20.0).unwrap());
      assert_eq!(ride.end(), GeoPoint::new(30.0, 40.0).unwrap());
      assert_eq!(ride.rider_name(), "A");
      assert_eq!(ride.driver_name(), "B");
      assert_eq!(ride.driver_vehicle(), "C");
   }
}
