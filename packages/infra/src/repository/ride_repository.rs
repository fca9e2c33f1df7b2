//! # RideRepository
//!
//! 配車記録の挿入・一覧・単体取得を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **ID はストアが採番**: `INSERT ... RETURNING` で、挿入と同じ文の中で採番値を受け取る。
//!   「最後に挿入された ID」を別クエリで読み直すと、並行挿入時に他リクエストの ID を
//!   拾う可能性があるため
//! - **自然順**: 一覧は `rideID` 昇順（挿入順）で返す
//! - **見つからないことはエラーではない**: 空の `Vec` / `None` で返し、判断は呼び出し側に委ねる

use async_trait::async_trait;
use chrono::NaiveDateTime;
use ridebook_domain::{
   pagination::Pagination,
   ride::{NewRide, RestoredRide, Ride, RideId},
};
use sqlx::SqlitePool;

use crate::error::InfraError;

/// 配車記録リポジトリトレイト
#[async_trait]
pub trait RideRepository: Send + Sync {
   /// 配車記録を挿入し、採番された ID を返す
   async fn insert(&self, ride: &NewRide) -> Result<RideId, InfraError>;

   /// 配車記録を挿入順に取得する
   ///
   /// `pagination` が `None` の場合は全件を返す。
   async fn find_all(&self, pagination: Option<Pagination>) -> Result<Vec<Ride>, InfraError>;

   /// ID で配車記録を検索する
   async fn find_by_id(&self, id: RideId) -> Result<Option<Ride>, InfraError>;
}

/// SQLite 実装の RideRepository
#[derive(Debug, Clone)]
pub struct SqliteRideRepository {
   pool: SqlitePool,
}

impl SqliteRideRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: SqlitePool) -> Self {
      Self { pool }
   }
}

/// `Rides` テーブルの 1 行
#[derive(Debug, sqlx::FromRow)]
struct RideRow {
   ride_id:        i64,
   start_lat:      f64,
   start_long:     f64,
   end_lat:        f64,
   end_long:       f64,
   rider_name:     String,
   driver_name:    String,
   driver_vehicle: String,
   created:        NaiveDateTime,
}

impl TryFrom<RideRow> for Ride {
   type Error = InfraError;

   fn try_from(row: RideRow) -> Result<Self, Self::Error> {
      let id = RideId::from_i64(row.ride_id);
      let restored = RestoredRide {
         start_lat:      row.start_lat,
         start_long:     row.start_long,
         end_lat:        row.end_lat,
         end_long:       row.end_long,
         rider_name:     row.rider_name,
         driver_name:    row.driver_name,
         driver_vehicle: row.driver_vehicle,
      };

      Ride::restore(id, restored, row.created).ok_or_else(|| {
         InfraError::unexpected(format!("不変条件を満たさない配車記録です: rideID={id}"))
      })
   }
}

#[async_trait]
impl RideRepository for SqliteRideRepository {
   #[tracing::instrument(skip_all, level = "debug")]
   async fn insert(&self, ride: &NewRide) -> Result<RideId, InfraError> {
      let ride_id: i64 = sqlx::query_scalar(
         r#"
         INSERT INTO Rides (startLat, startLong, endLat, endLong, riderName, driverName, driverVehicle)
         VALUES (?, ?, ?, ?, ?, ?, ?)
         RETURNING rideID
         "#,
      )
      .bind(ride.start().latitude())
      .bind(ride.start().longitude())
      .bind(ride.end().latitude())
      .bind(ride.end().longitude())
      .bind(ride.rider_name())
      .bind(ride.driver_name())
      .bind(ride.driver_vehicle())
      .fetch_one(&self.pool)
      .await?;

      Ok(RideId::from_i64(ride_id))
   }

   #[tracing::instrument(skip_all, level = "debug", fields(?pagination))]
   async fn find_all(&self, pagination: Option<Pagination>) -> Result<Vec<Ride>, InfraError> {
      let rows: Vec<RideRow> = match pagination {
         Some(pagination) => {
            sqlx::query_as(
               r#"
               SELECT rideID AS ride_id, startLat AS start_lat, startLong AS start_long,
                      endLat AS end_lat, endLong AS end_long, riderName AS rider_name,
                      driverName AS driver_name, driverVehicle AS driver_vehicle, created
               FROM Rides
               ORDER BY rideID ASC
               LIMIT ? OFFSET ?
               "#,
            )
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await?
         }
         None => {
            sqlx::query_as(
               r#"
               SELECT rideID AS ride_id, startLat AS start_lat, startLong AS start_long,
                      endLat AS end_lat, endLong AS end_long, riderName AS rider_name,
                      driverName AS driver_name, driverVehicle AS driver_vehicle, created
               FROM Rides
               ORDER BY rideID ASC
               "#,
            )
            .fetch_all(&self.pool)
            .await?
         }
      };

      rows.into_iter().map(Ride::try_from).collect()
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn find_by_id(&self, id: RideId) -> Result<Option<Ride>, InfraError> {
      let row: Option<RideRow> = sqlx::query_as(
         r#"
         SELECT rideID AS ride_id, startLat AS start_lat, startLong AS start_long,
                endLat AS end_lat, endLong AS end_long, riderName AS rider_name,
                driverName AS driver_name, driverVehicle AS driver_vehicle, created
         FROM Rides
         WHERE rideID = ?
         "#,
      )
      .bind(id.as_i64())
      .fetch_optional(&self.pool)
      .await?;

      row.map(Ride::try_from).transpose()
   }
}
