//! # ドメイン層エラー定義
//!
//! 入力値がビジネスルールに違反している状態を表現するエラー型。
//!
//! ## 設計方針
//!
//! - **最初の違反のみ**: 検証は決められた順に評価し、最初に失敗した制約だけを返す
//! - **thiserror 活用**: `Display` がそのままクライアント向けメッセージになる
//! - **HTTP との分離**: エラーコードへの変換は API 層の責務
//!
//! ## 評価順序と対応するバリアント
//!
//! | 順序 | 検証内容 | バリアント |
//! |------|----------|------------|
//! | 1 | 出発地の緯度経度 | `StartCoordinatesOutOfRange` |
//! | 2 | 目的地の緯度経度 | `EndCoordinatesOutOfRange` |
//! | 3 | 乗客名 | `RiderNameRequired` |
//! | 4 | 運転手名 | `DriverNameRequired` |
//! | 5 | 車両 | `DriverVehicleRequired` |

use thiserror::Error;

/// 入力検証エラー
///
/// 作成リクエスト、ID、ページ指定の検証で発生する。
/// すべてクライアントに返却して回復可能なエラーとして扱う。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
   /// 出発地の緯度経度が範囲外、または数値でない
   #[error(
      "Start latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively"
   )]
   StartCoordinatesOutOfRange,

   /// 目的地の緯度経度が範囲外、または数値でない
   #[error(
      "End latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively"
   )]
   EndCoordinatesOutOfRange,

   /// 乗客名が未指定、空文字列、または文字列でない
   #[error("Rider name must be a non empty string")]
   RiderNameRequired,

   /// 運転手名が未指定、空文字列、または文字列でない
   #[error("Driver name must be a non empty string")]
   DriverNameRequired,

   /// 車両が未指定、空文字列、または文字列でない
   #[error("Driver vehicle must be a non empty string")]
   DriverVehicleRequired,

   /// リクエストボディが JSON オブジェクトとして解釈できない
   #[error("Request body must be a JSON object")]
   MalformedBody,

   /// ページ指定が不正
   ///
   /// `page` と `pageSize` はそろって正の整数である必要がある。
   #[error("page and pageSize must be number")]
   InvalidPagination,

   /// ID が整数でない
   #[error("Id must be number")]
   InvalidRideId,
}
