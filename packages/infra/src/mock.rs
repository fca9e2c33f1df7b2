//! # テスト用モックリポジトリ
//!
//! ハンドラ・ユースケーステストで使用するインメモリリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! ridebook-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{
   Arc,
   atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime};
use ridebook_domain::{
   pagination::Pagination,
   ride::{NewRide, Ride, RideId},
};
use tokio::sync::Mutex;

use crate::{error::InfraError, repository::RideRepository};

/// インメモリの RideRepository
///
/// SQLite 実装と同じく、ID を 1 から挿入順に採番し、一覧を ID 昇順で返す。
/// [`fail_with_store_error`](Self::fail_with_store_error) でストア障害を再現できる。
#[derive(Clone, Default)]
pub struct InMemoryRideRepository {
   rides:   Arc<Mutex<Vec<Ride>>>,
   failing: Arc<AtomicBool>,
}

impl InMemoryRideRepository {
   pub fn new() -> Self {
      Self::default()
   }

   /// 以降のすべての操作をストア障害として失敗させる
   pub fn fail_with_store_error(&self) {
      self.failing.store(true, Ordering::SeqCst);
   }

   /// 保存済みの件数を返す
   pub async fn len(&self) -> usize {
      self.rides.lock().await.len()
   }

   /// 保存済みの配車記録がなければ `true`
   pub async fn is_empty(&self) -> bool {
      self.rides.lock().await.is_empty()
   }

   fn check_available(&self) -> Result<(), InfraError> {
      if self.failing.load(Ordering::SeqCst) {
         return Err(sqlx::Error::PoolTimedOut.into());
      }
      Ok(())
   }
}

/// テスト用の固定作成日時
fn fixed_created() -> NaiveDateTime {
   DateTime::from_timestamp(1_700_000_000, 0)
      .map(|dt| dt.naive_utc())
      .unwrap_or_default()
}

#[async_trait]
impl RideRepository for InMemoryRideRepository {
   async fn insert(&self, ride: &NewRide) -> Result<RideId, InfraError> {
      self.check_available()?;
      let mut rides = self.rides.lock().await;
      let next_id = rides.last().map_or(1, |last| last.id().as_i64() + 1);
      let id = RideId::from_i64(next_id);
      rides.push(Ride::from_db(id, ride.clone(), fixed_created()));
      Ok(id)
   }

   async fn find_all(&self, pagination: Option<Pagination>) -> Result<Vec<Ride>, InfraError> {
      self.check_available()?;
      let rides = self.rides.lock().await;
      let page = match pagination {
         Some(pagination) => rides
            .iter()
            .skip(usize::try_from(pagination.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(pagination.limit()).unwrap_or(usize::MAX))
            .cloned()
            .collect(),
         None => rides.clone(),
      };
      Ok(page)
   }

   async fn find_by_id(&self, id: RideId) -> Result<Option<Ride>, InfraError> {
      self.check_available()?;
      Ok(self
         .rides
         .lock()
         .await
         .iter()
         .find(|ride| ride.id() == id)
         .cloned())
   }
}
