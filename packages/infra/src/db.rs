//! # SQLite データベース接続管理
//!
//! データベース接続プールの作成と、スキーマの適用を行う。
//!
//! ## 設計方針
//!
//! - **接続プール**: プールをアプリケーション起動時に一度だけ作成し、ハンドラに注入する
//! - **sqlx 採用**: 非同期サポート、パラメータバインドによる安全なクエリ
//! - **インメモリ DB の保持**: `sqlite::memory:` は最後の接続が閉じると消えるため、
//!   単一の接続を期限なしで保持する
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use ridebook_infra::db;
//!
//! let pool = db::create_pool("sqlite://rides.db", 5).await?;
//! db::run_migrations(&pool).await?;
//! ```

use std::{str::FromStr, time::Duration};

use sqlx::{
   SqlitePool,
   sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::error::InfraError;

/// 接続取得のタイムアウト
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite 接続プールを作成する
///
/// # 引数
///
/// * `database_url` - SQLite 接続 URL
///   - ファイル: `sqlite://rides.db`（存在しなければ作成する）
///   - インメモリ: `sqlite::memory:`
/// * `max_connections` - ファイル DB の最大接続数。インメモリ DB では無視して 1 とする
///
/// # エラー
///
/// URL の解析失敗、ファイルのオープン失敗時に [`InfraError`] を返す。
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, InfraError> {
   let connect_options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

   let pool_options = if is_in_memory(database_url) {
      SqlitePoolOptions::new()
         .max_connections(1)
         .min_connections(1)
         .idle_timeout(None)
         .max_lifetime(None)
   } else {
      SqlitePoolOptions::new().max_connections(max_connections)
   };

   let pool = pool_options
      .acquire_timeout(ACQUIRE_TIMEOUT)
      .connect_with(connect_options)
      .await?;

   Ok(pool)
}

/// データベースマイグレーションを実行する
///
/// `sqlx::migrate!()` マクロで埋め込まれたマイグレーションファイルを
/// 順番に適用する。適用済みのマイグレーションはスキップされる。
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), InfraError> {
   sqlx::migrate!("../../migrations").run(pool).await?;
   Ok(())
}

fn is_in_memory(database_url: &str) -> bool {
   database_url.contains(":memory:") || database_url.contains("mode=memory")
}
