//! # ログ出力の初期化
//!
//! `tracing` の subscriber を組み立て、サービス名付きの起動ログを出力する。
//!
//! | 環境変数 | 値 | デフォルト |
//! |----------|----|------------|
//! | `LOG_FORMAT` | `json` / `pretty`（大文字小文字を区別しない） | `pretty` |
//! | `RUST_LOG` | `EnvFilter` の書式 | [`DEFAULT_FILTER`] |
//!
//! `LOG_FORMAT` が解釈できない値の場合は `pretty` で起動し、
//! subscriber の登録後に警告ログとして報告する。

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_FILTER: &str = "info,ridebook=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
   /// 1 行 1 イベントの JSON
   Json,
   /// 開発向けの整形出力
   #[default]
   Pretty,
}

impl LogFormat {
   /// 環境変数の値を解釈する。未知の値は `None`
   pub fn parse(value: &str) -> Option<Self> {
      match value.trim().to_ascii_lowercase().as_str() {
         "json" => Some(Self::Json),
         "pretty" => Some(Self::Pretty),
         _ => None,
      }
   }
}

/// トレーシング初期化設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
   /// 起動ログの `service` フィールドに出力する名前
   pub service_name:       String,
   pub log_format:         LogFormat,
   /// 解釈できずに無視した `LOG_FORMAT` の値
   pub unknown_log_format: Option<String>,
}

impl TracingConfig {
   /// 環境変数 `LOG_FORMAT` から設定を読み取る
   pub fn from_env(service_name: impl Into<String>) -> Self {
      Self::from_log_format(service_name, std::env::var("LOG_FORMAT").ok().as_deref())
   }

   /// `LOG_FORMAT` の生の値から設定を作成する
   pub fn from_log_format(service_name: impl Into<String>, log_format: Option<&str>) -> Self {
      let (log_format, unknown_log_format) = match log_format {
         None => (LogFormat::default(), None),
         Some(value) => match LogFormat::parse(value) {
            Some(format) => (format, None),
            None => (LogFormat::default(), Some(value.to_string())),
         },
      };

      Self {
         service_name: service_name.into(),
         log_format,
         unknown_log_format,
      }
   }
}

/// subscriber を登録し、起動ログを出力する
///
/// `tracing_error::ErrorLayer` を含めるため、インフラ層エラーの
/// `SpanTrace` にはスパン情報が記録される。
#[cfg(feature = "observability")]
pub fn init_tracing(config: &TracingConfig) {
   use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

   let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| DEFAULT_FILTER.into());

   let fmt_layer = match config.log_format {
      LogFormat::Json => tracing_subscriber::fmt::layer()
         .json()
         .flatten_event(true)
         .with_current_span(true)
         .boxed(),
      LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
   };

   tracing_subscriber::registry()
      .with(env_filter)
      .with(fmt_layer)
      .with(tracing_error::ErrorLayer::default())
      .init();

   announce(config);
}

/// 初期化結果をログに出力する
#[cfg(any(test, feature = "observability"))]
fn announce(config: &TracingConfig) {
   tracing::info!(
      service = %config.service_name,
      log_format = ?config.log_format,
      "ログ出力を初期化しました"
   );
   if let Some(value) = &config.unknown_log_format {
      tracing::warn!(
         service = %config.service_name,
         log_format = %value,
         "LOG_FORMAT を解釈できないため pretty で出力します"
      );
   }
}

#[cfg(test)]
mod tests {
   use std::{
      io,
      sync::{Arc, Mutex},
   };

   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   #[derive(Clone, Default)]
   struct CapturedLog(Arc<Mutex<Vec<u8>>>);

   impl io::Write for CapturedLog {
      fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
         self.0.lock().unwrap().extend_from_slice(buf);
         Ok(buf.len())
      }

      fn flush(&mut self) -> io::Result<()> {
         Ok(())
      }
   }

   impl CapturedLog {
      fn text(&self) -> String {
         String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
      }
   }

   fn capture(config: &TracingConfig) -> String {
      let log = CapturedLog::default();
      let writer = log.clone();
      let subscriber = tracing_subscriber::fmt()
         .with_writer(move || writer.clone())
         .with_ansi(false)
         .finish();

      tracing::subscriber::with_default(subscriber, || announce(config));
      log.text()
   }

   #[rstest]
   #[case("json", Some(LogFormat::Json))]
   #[case(" JSON ", Some(LogFormat::Json))]
   #[case("Pretty", Some(LogFormat::Pretty))]
   #[case("yaml", None)]
   #[case("", None)]
   fn test_parse_大文字小文字を区別せずに解釈する(
      #[case] input: &str,
      #[case] expected: Option<LogFormat>,
   ) {
      assert_eq!(LogFormat::parse(input), expected);
   }

   #[test]
   fn test_未設定ならprettyで警告なし() {
      let config = TracingConfig::from_log_format("ride-service", None);

      assert_eq!(config.log_format, LogFormat::Pretty);
      assert_eq!(config.unknown_log_format, None);
   }

   #[test]
   fn test_未知の値はprettyにして値を記録する() {
      let config = TracingConfig::from_log_format("ride-service", Some("yaml"));

      assert_eq!(config.log_format, LogFormat::Pretty);
      assert_eq!(config.unknown_log_format.as_deref(), Some("yaml"));
   }

   #[test]
   fn test_起動ログにサービス名が出力される() {
      let config = TracingConfig::from_log_format("ride-service", Some("json"));

      let log = capture(&config);

      assert!(log.contains("service=ride-service"), "{log}");
      assert!(log.contains("log_format=Json"), "{log}");
      assert!(!log.contains("WARN"), "{log}");
   }

   #[test]
   fn test_未知のlog_formatは警告ログで報告される() {
      let config = TracingConfig::from_log_format("ride-service", Some("yaml"));

      let log = capture(&config);

      assert!(log.contains("WARN"), "{log}");
      assert!(log.contains("log_format=yaml"), "{log}");
   }
}
