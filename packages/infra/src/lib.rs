//! # Ridebook インフラ層
//!
//! 配車記録の永続化を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! リポジトリトレイトと、その SQLite 実装を提供する。
//! 永続化の詳細をカプセル化し、上位層はトレイト経由でのみストアに触れる。
//!
//! ## 責務
//!
//! - **データベース接続**: SQLite 接続プールの作成とスキーマ適用
//! - **リポジトリ実装**: 配車記録の挿入・一覧・単体取得
//!
//! ## 依存関係
//!
//! ```text
//! ride-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - SQLite 接続管理とマイグレーション
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと実装
//! - `mock` - テスト用インメモリリポジトリ（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use ridebook_infra::{db, repository::SqliteRideRepository};
//!
//! let pool = db::create_pool("sqlite::memory:", 5).await?;
//! db::run_migrations(&pool).await?;
//! let repository = SqliteRideRepository::new(pool);
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
