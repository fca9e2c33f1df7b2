//! # 配車記録ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /rides` - 配車記録の作成
//! - `GET /rides?page=&pageSize=` - 配車記録の一覧（ページ指定は任意）
//! - `GET /rides/{id}` - 配車記録の取得
//!
//! 検証エラーと 0 件は `200 OK` のままエラーボディで返す（[`CoreError`] 参照）。

use std::sync::Arc;

use axum::{
   Json,
   extract::{
      Path,
      Query,
      State,
      rejection::{JsonRejection, QueryRejection},
   },
   response::IntoResponse,
};
use ridebook_domain::{
   ValidationError,
   ride::{Ride, RideDraft},
};
use serde::{Deserialize, Serialize};

use crate::{
   error::CoreError,
   usecase::{CreatedRide, RideUseCaseImpl},
};

/// 配車記録 API の共有状態
pub struct RideState {
   pub usecase: RideUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 一覧取得のクエリパラメータ
///
/// 数値変換はドメイン層で行うため、ここでは文字列のまま受け取る。
#[derive(Debug, Default, Deserialize)]
pub struct ListRidesQuery {
   pub page:      Option<String>,
   #[serde(rename = "pageSize")]
   pub page_size: Option<String>,
}

/// 作成結果 DTO
///
/// リクエストと同じ snake_case のフィールド名に、採番された `rideID` を加える。
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CreatedRideDto {
   #[serde(rename = "rideID")]
   pub ride_id:        i64,
   pub start_lat:      f64,
   pub start_long:     f64,
   pub end_lat:        f64,
   pub end_long:       f64,
   pub rider_name:     String,
   pub driver_name:    String,
   pub driver_vehicle: String,
}

impl From<CreatedRide> for CreatedRideDto {
   fn from(created: CreatedRide) -> Self {
      let CreatedRide { id, ride } = created;
      Self {
         ride_id:        id.as_i64(),
         start_lat:      ride.start().latitude(),
         start_long:     ride.start().longitude(),
         end_lat:        ride.end().latitude(),
         end_long:       ride.end().longitude(),
         rider_name:     ride.rider_name().to_string(),
         driver_name:    ride.driver_name().to_string(),
         driver_vehicle: ride.driver_vehicle().to_string(),
      }
   }
}

/// 配車記録 DTO
///
/// ストアのカラム名（`rideID`, `startLat`, ...）をそのままフィールド名とする。
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RideDto {
   #[serde(rename = "rideID")]
   pub ride_id:        i64,
   pub start_lat:      f64,
   pub start_long:     f64,
   pub end_lat:        f64,
   pub end_long:       f64,
   pub rider_name:     String,
   pub driver_name:    String,
   pub driver_vehicle: String,
   /// `YYYY-MM-DD HH:MM:SS`（UTC）
   pub created:        String,
}

impl From<&Ride> for RideDto {
   fn from(ride: &Ride) -> Self {
      Self {
         ride_id:        ride.id().as_i64(),
         start_lat:      ride.start().latitude(),
         start_long:     ride.start().longitude(),
         end_lat:        ride.end().latitude(),
         end_long:       ride.end().longitude(),
         rider_name:     ride.rider_name().to_string(),
         driver_name:    ride.driver_name().to_string(),
         driver_vehicle: ride.driver_vehicle().to_string(),
         created:        ride.created().format("%Y-%m-%d %H:%M:%S").to_string(),
      }
   }
}

// --- ハンドラ ---

/// POST /rides
///
/// 配車記録を作成し、作成結果を 1 要素の配列で返す。
/// ボディが JSON オブジェクトとして解釈できない場合も検証エラーとして返す。
#[tracing::instrument(skip_all)]
pub async fn create_ride(
   State(state): State<Arc<RideState>>,
   body: Result<Json<RideDraft>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
   let Json(draft) = body.map_err(|rejection| {
      tracing::debug!(%rejection, "リクエストボディを解釈できません");
      ValidationError::MalformedBody
   })?;

   let created = state.usecase.create_ride(draft).await?;

   Ok(Json(vec![CreatedRideDto::from(created)]))
}

/// GET /rides
///
/// 配車記録を挿入順で返す。`page` と `pageSize` を両方指定した場合はその範囲のみ。
#[tracing::instrument(skip_all)]
pub async fn list_rides(
   State(state): State<Arc<RideState>>,
   query: Result<Query<ListRidesQuery>, QueryRejection>,
) -> Result<impl IntoResponse, CoreError> {
   let Query(query) = query.map_err(|_| ValidationError::InvalidPagination)?;

   let rides = state
      .usecase
      .list_rides(query.page.as_deref(), query.page_size.as_deref())
      .await?;

   let items: Vec<RideDto> = rides.iter().map(RideDto::from).collect();
   Ok(Json(items))
}

/// GET /rides/{id}
///
/// 配車記録を 1 件返す。
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_ride(
   State(state): State<Arc<RideState>>,
   Path(id): Path<String>,
) -> Result<impl IntoResponse, CoreError> {
   let ride = state.usecase.get_ride(&id).await?;

   Ok(Json(RideDto::from(&ride)))
}
