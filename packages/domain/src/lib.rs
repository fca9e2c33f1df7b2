//! # Ridebook ドメイン層
//!
//! 配車記録サービスのドメインモデルと入力検証を定義する。
//!
//! ## 設計方針
//!
//! - **純粋なロジック**: I/O を持たず、永続化や HTTP の詳細に依存しない
//! - **検証の集約**: リクエスト由来の緩い型の値はこの層で一度だけ型付けする
//! - **エラーの型分類**: 検証失敗は [`ValidationError`] で表現する
//!
//! ## モジュール構成
//!
//! - [`ride`] - 配車記録エンティティ、識別子、作成リクエストの検証
//! - [`pagination`] - 一覧取得のページ指定
//! - [`error`] - 検証エラー定義
//!
//! ## 依存関係
//!
//! ```text
//! ride-service → infra → domain
//!       ↘                  ↑
//!         ──────────────────
//! ```
//!
//! ## 使用例
//!
//! ```rust
//! use ridebook_domain::ride::RideDraft;
//! use serde_json::json;
//!
//! let draft: RideDraft = serde_json::from_value(json!({
//!     "start_lat": 10, "start_long": 20,
//!     "end_lat": 30, "end_long": 40,
//!     "rider_name": "A", "driver_name": "B", "driver_vehicle": "C"
//! }))
//! .unwrap();
//!
//! let new_ride = draft.validate().unwrap();
//! assert_eq!(new_ride.rider_name(), "A");
//! ```

pub mod error;
pub mod pagination;
pub mod ride;

pub use error::ValidationError;
