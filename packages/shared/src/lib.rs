//! # Ridebook 共有ユーティリティ
//!
//! このクレートは、Ridebook プロジェクト全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレートから依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - 外部クレートへの依存は最小限に抑える（トレーシング初期化は `observability` feature）

pub mod error_response;
pub mod observability;

pub use error_response::ErrorResponse;
