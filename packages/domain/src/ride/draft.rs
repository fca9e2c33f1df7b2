//! # 配車記録作成リクエストの検証
//!
//! クライアントから受け取った未検証の入力を [`NewRide`] に変換する。
//!
//! 座標は JSON の数値だけでなく数値文字列（`"10.5"` など）も受け付ける。
//! 型変換はすべてこのモジュールで行い、変換できない値は範囲外として扱う。

use serde::Deserialize;
use serde_json::Value;

use super::{GeoPoint, NewRide};
use crate::error::ValidationError;

/// 未検証の配車記録作成リクエスト
///
/// 各フィールドは省略可能かつ任意の JSON 値を受け付ける。
/// 型の不一致でデシリアライズ自体が失敗しないようにし、
/// 検証エラーとしてクライアントに返せるようにするため。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RideDraft {
   pub start_lat:      Option<Value>,
   pub start_long:     Option<Value>,
   pub end_lat:        Option<Value>,
   pub end_long:       Option<Value>,
   pub rider_name:     Option<Value>,
   pub driver_name:    Option<Value>,
   pub driver_vehicle: Option<Value>,
}

impl RideDraft {
   /// 入力を検証し、検証済みの作成リクエストを返す
   ///
   /// 以下の順に評価し、最初に失敗した制約のみを返す:
   ///
   /// 1. 出発地の緯度経度
   /// 2. 目的地の緯度経度
   /// 3. 乗客名
   /// 4. 運転手名
   /// 5. 車両
   pub fn validate(self) -> Result<NewRide, ValidationError> {
      let start = geo_point(self.start_lat.as_ref(), self.start_long.as_ref())
         .ok_or(ValidationError::StartCoordinatesOutOfRange)?;
      let end = geo_point(self.end_lat.as_ref(), self.end_long.as_ref())
         .ok_or(ValidationError::EndCoordinatesOutOfRange)?;
      let rider_name = non_empty_text(self.rider_name).ok_or(ValidationError::RiderNameRequired)?;
      let driver_name =
         non_empty_text(self.driver_name).ok_or(ValidationError::DriverNameRequired)?;
      let driver_vehicle =
         non_empty_text(self.driver_vehicle).ok_or(ValidationError::DriverVehicleRequired)?;

      Ok(NewRide {
         start,
         end,
         rider_name,
         driver_name,
         driver_vehicle,
      })
   }
}

fn geo_point(latitude: Option<&Value>, longitude: Option<&Value>) -> Option<GeoPoint> {
   GeoPoint::new(coerce_number(latitude)?, coerce_number(longitude)?)
}

/// JSON 値を有限の浮動小数点数に変換する
///
/// 数値と、前後の空白を除いて数値として解釈できる文字列のみ変換する。
/// 空文字列・`null`・真偽値・配列・オブジェクト・非有限値は `None`。
fn coerce_number(value: Option<&Value>) -> Option<f64> {
   let number = match value? {
      Value::Number(number) => number.as_f64(),
      Value::String(text) => text.trim().parse::<f64>().ok(),
      _ => None,
   }?;
   number.is_finite().then_some(number)
}

fn non_empty_text(value: Option<Value>) -> Option<String> {
   match value? {
      Value::String(text) if !text.is_empty() => Some(text),
      _ => None,
   }
}
