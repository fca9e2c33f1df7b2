//! # リポジトリ実装
//!
//! 配車記録ストアへのアクセスを提供する。
//!
//! ## 設計方針
//!
//! - **トレイト経由のアクセス**: ハンドラ・ユースケースは `dyn RideRepository` に依存する
//! - **パラメータバインド**: SQL に値を文字列結合しない
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod ride_repository;

pub use ride_repository::{RideRepository, SqliteRideRepository};
