//! # Ride Service ライブラリ
//!
//! 配車記録サービスのルーター、ハンドラ、ユースケースを公開する。
//! バイナリ（`main.rs`）と統合テストの双方から利用する。
//!
//! ## 処理の流れ
//!
//! ```text
//! HTTP リクエスト
//!      │
//!      ▼
//! handler ──▶ usecase ──▶ domain（検証、作成時のみ）
//!                │
//!                ▼
//!          RideRepository ──▶ SQLite
//! ```
//!
//! ## モジュール構成
//!
//! - [`app`] - ルーター構築
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - サービスエラーと HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`usecase`] - 配車記録のユースケース

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
