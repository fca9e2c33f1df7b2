//! # Ride Service 設定
//!
//! 環境変数から Ride Service サーバーの設定を読み込む。
//!
//! | 変数名 | デフォルト |
//! |--------|------------|
//! | `RIDES_HOST` | `0.0.0.0` |
//! | `RIDES_PORT` | `8010` |
//! | `DATABASE_URL` | `sqlite::memory:` |
//! | `DATABASE_MAX_CONNECTIONS` | `5` |

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8010;
const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// 設定の読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
   #[error("{name} は有効な数値である必要があります: {value}")]
   InvalidNumber { name: &'static str, value: String },
}

/// Ride Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RideServiceConfig {
   /// バインドアドレス
   pub host:                     String,
   /// ポート番号
   pub port:                     u16,
   /// SQLite 接続 URL
   pub database_url:             String,
   /// 接続プールの最大接続数（インメモリ DB では無視される）
   pub database_max_connections: u32,
}

impl RideServiceConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|name| env::var(name).ok())
   }

   /// 任意の参照関数から設定を読み込む
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      Ok(Self {
         host:                     lookup("RIDES_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
         port:                     parse_or("RIDES_PORT", lookup("RIDES_PORT"), DEFAULT_PORT)?,
         database_url:             lookup("DATABASE_URL")
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
         database_max_connections: parse_or(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
         )?,
      })
   }
}

fn parse_or<T: std::str::FromStr>(
   name: &'static str,
   value: Option<String>,
   default: T,
) -> Result<T, ConfigError> {
   match value {
      None => Ok(default),
      Some(value) => value
         .trim()
         .parse()
         .map_err(|_| ConfigError::InvalidNumber { name, value }),
   }
}
