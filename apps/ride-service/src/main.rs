//! # Ride Service サーバー
//!
//! 配車記録の作成・一覧・取得を提供する HTTP サービス。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `RIDES_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `RIDES_PORT` | No | ポート番号（デフォルト: `8010`） |
//! | `DATABASE_URL` | No | SQLite 接続 URL（デフォルト: `sqlite::memory:`） |
//! | `DATABASE_MAX_CONNECTIONS` | No | 最大接続数（デフォルト: `5`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,ridebook=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p ridebook-ride-service
//!
//! DATABASE_URL=sqlite://rides.db RIDES_PORT=8010 cargo run -p ridebook-ride-service --release
//! ```

use std::sync::Arc;

use anyhow::Context;
use ridebook_infra::{db, repository::SqliteRideRepository};
use ridebook_ride_service::{app::build_app, config::RideServiceConfig};
use ridebook_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   init_tracing(&TracingConfig::from_env("ride-service"));

   let config = RideServiceConfig::from_env().context("設定の読み込みに失敗しました")?;

   tracing::info!(
      "Ride Service サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   let pool = db::create_pool(&config.database_url, config.database_max_connections)
      .await
      .context("データベース接続に失敗しました")?;
   db::run_migrations(&pool)
      .await
      .context("マイグレーションに失敗しました")?;
   tracing::info!("データベースに接続しました");

   let app = build_app(Arc::new(SqliteRideRepository::new(pool)));

   let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
   tracing::info!(
      "Ride Service サーバーが起動しました: {}",
      listener.local_addr()?
   );

   axum::serve(listener, app)
      .with_graceful_shutdown(shutdown_signal())
      .await?;

   tracing::info!("Ride Service サーバーを停止しました");
   Ok(())
}

async fn shutdown_signal() {
   if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!(error = %e, "シグナルハンドラの登録に失敗しました");
      std::future::pending::<()>().await;
   }
}
