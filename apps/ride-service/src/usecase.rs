//! # 配車記録ユースケース
//!
//! 作成・一覧・単体取得の各操作で、入力の解釈・検証とストア操作を結び付ける。
//!
//! - 作成: 検証 → 挿入。検証に失敗した場合はストアに触れない
//! - 一覧: ページ指定の解釈 → 取得。0 件は [`CoreError::NotFound`]
//! - 単体取得: ID の解釈 → 取得。該当なしは [`CoreError::NotFound`]

use std::sync::Arc;

use ridebook_domain::{
   pagination::Pagination,
   ride::{NewRide, Ride, RideDraft, RideId},
};
use ridebook_infra::repository::RideRepository;

use crate::error::CoreError;

/// 作成された配車記録
///
/// 採番された ID と、検証済みの入力値の組。
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedRide {
   pub id:   RideId,
   pub ride: NewRide,
}

/// 配車記録ユースケースの実装
pub struct RideUseCaseImpl {
   repository: Arc<dyn RideRepository>,
}

impl RideUseCaseImpl {
   pub fn new(repository: Arc<dyn RideRepository>) -> Self {
      Self { repository }
   }

   /// 配車記録を作成する
   pub async fn create_ride(&self, draft: RideDraft) -> Result<CreatedRide, CoreError> {
      let ride = draft.validate().inspect_err(|e| {
         tracing::debug!(reason = %e, "配車記録の作成リクエストを拒否しました");
      })?;

      let id = self.repository.insert(&ride).await?;
      tracing::info!(ride_id = %id, "配車記録を作成しました");

      Ok(CreatedRide { id, ride })
   }

   /// 配車記録を挿入順に取得する
   ///
   /// `page` と `page_size` はクエリパラメータの生の値。
   pub async fn list_rides(
      &self,
      page: Option<&str>,
      page_size: Option<&str>,
   ) -> Result<Vec<Ride>, CoreError> {
      let pagination = Pagination::from_query(page, page_size)?;

      let rides = self.repository.find_all(pagination).await?;
      if rides.is_empty() {
         tracing::debug!(?pagination, "該当する配車記録がありません");
         return Err(CoreError::NotFound);
      }

      Ok(rides)
   }

   /// ID で配車記録を取得する
   ///
   /// `id` はパスパラメータの生の値。数値でなければストアに問い合わせない。
   /// `i64` に収まらない整数は、問い合わせずに該当なしとする。
   pub async fn get_ride(&self, id: &str) -> Result<Ride, CoreError> {
      let Some(id) = RideId::parse(id)? else {
         return Err(CoreError::NotFound);
      };

      self.repository
         .find_by_id(id)
         .await?
         .ok_or(CoreError::NotFound)
   }
}
