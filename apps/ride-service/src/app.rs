//! # ルーター構築
//!
//! ```text
//! GET  /health       -> health_check
//! POST /rides        -> create_ride
//! GET  /rides        -> list_rides
//! GET  /rides/{id}   -> get_ride
//! ```

use std::sync::Arc;

use axum::{Router, routing::get};
use ridebook_infra::repository::RideRepository;
use tower_http::trace::TraceLayer;

use crate::{
   handler::{RideState, create_ride, get_ride, health_check, list_rides},
   usecase::RideUseCaseImpl,
};

/// リポジトリを注入してルーターを構築する
///
/// 本番では `SqliteRideRepository`、テストではインメモリ実装を渡す。
pub fn build_app(repository: Arc<dyn RideRepository>) -> Router {
   let ride_state = Arc::new(RideState {
      usecase: RideUseCaseImpl::new(repository),
   });

   Router::new()
      .route("/health", get(health_check))
      .route("/rides", get(list_rides).post(create_ride))
      .route("/rides/{id}", get(get_ride))
      .with_state(ride_state)
      .layer(TraceLayer::new_for_http())
}
