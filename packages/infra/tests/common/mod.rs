//! テスト共通フィクスチャ
//!
//! SQLite を使用する統合テストで共通利用するプール生成・エンティティ生成ヘルパー。
//! Rust の統合テスト規約に従い `tests/common/mod.rs` に配置。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use ridebook_domain::ride::{NewRide, RideDraft};
use ridebook_infra::db;
use serde_json::json;
use sqlx::SqlitePool;

/// マイグレーション適用済みのインメモリ DB を作成する
///
/// 呼び出しごとに独立した DB が作られる。
pub async fn setup_pool() -> SqlitePool {
   let pool = db::create_pool("sqlite::memory:", 1)
      .await
      .expect("インメモリ DB の作成に失敗");
   db::run_migrations(&pool)
      .await
      .expect("マイグレーションの適用に失敗");
   pool
}

/// 検証済みの作成リクエストを作る
pub fn new_ride(start_lat: f64, rider_name: &str) -> NewRide {
   serde_json::from_value::<RideDraft>(json!({
      "start_lat": start_lat,
      "start_long": 20,
      "end_lat": 30,
      "end_long": 40,
      "rider_name": rider_name,
      "driver_name": "B",
      "driver_vehicle": "C"
   }))
   .expect("RideDraft のデシリアライズに失敗")
   .validate()
   .expect("テストデータが検証を通ること")
}
