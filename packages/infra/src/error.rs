//! # インフラ層エラー定義
//!
//! データベースとの通信で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **エラーの変換**: `sqlx::Error` と `MigrateError` をラップ
//! - **ドメインエラーとの分離**: 「見つからない」はエラーではなく `Option` / 空の `Vec` で返す
//! - **SpanTrace 自動捕捉**: `From` 実装や convenience constructor で
//!   エラー生成時の呼び出し経路を自動記録する
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// エラー種別（[`InfraErrorKind`]）と [`SpanTrace`]（呼び出し経路）を保持する。
/// API 層ではストア障害として扱い、クライアントには詳細を返さない。
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
   kind:       InfraErrorKind,
   span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
   /// データベースエラー
   ///
   /// SQL の実行失敗、接続エラー、制約違反など。
   #[error("データベースエラー: {0}")]
   Database(#[source] sqlx::Error),

   /// マイグレーションエラー
   #[error("マイグレーションエラー: {0}")]
   Migration(#[source] sqlx::migrate::MigrateError),

   /// 予期しないエラー
   ///
   /// 保存済みの値が不変条件を満たさない場合など。
   #[error("予期しないエラー: {0}")]
   Unexpected(String),
}

impl InfraError {
   /// エラー種別を取得する
   pub fn kind(&self) -> &InfraErrorKind {
      &self.kind
   }

   /// SpanTrace を取得する
   pub fn span_trace(&self) -> &SpanTrace {
      &self.span_trace
   }

   /// 予期しないエラーを生成する
   pub fn unexpected(msg: impl Into<String>) -> Self {
      Self {
         kind:       InfraErrorKind::Unexpected(msg.into()),
         span_trace: SpanTrace::capture(),
      }
   }
}

impl fmt::Debug for InfraError {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("InfraError")
         .field("kind", &self.kind)
         .field("span_trace", &self.span_trace)
         .finish()
   }
}

impl std::error::Error for InfraError {
   fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
      self.kind.source()
   }
}

// ===== From 実装（SpanTrace 自動キャプチャ） =====

impl From<sqlx::Error> for InfraError {
   fn from(source: sqlx::Error) -> Self {
      Self {
         kind:       InfraErrorKind::Database(source),
         span_trace: SpanTrace::capture(),
      }
   }
}

impl From<sqlx::migrate::MigrateError> for InfraError {
   fn from(source: sqlx::migrate::MigrateError) -> Self {
      Self {
         kind:       InfraErrorKind::Migration(source),
         span_trace: SpanTrace::capture(),
      }
   }
}

#[cfg(test)]
mod tests {
   use tracing_subscriber::layer::SubscriberExt as _;

   use super::*;

   /// テスト用に ErrorLayer 付き subscriber を設定する
   fn with_error_layer(f: impl FnOnce()) {
      let subscriber = tracing_subscriber::registry().with(tracing_error::ErrorLayer::default());
      let _guard = tracing::subscriber::set_default(subscriber);
      f();
   }

   #[test]
   fn test_from_sqlx_errorでspan_traceがキャプチャされる() {
      with_error_layer(|| {
         let span = tracing::info_span!("test_ride_repo", ride_id = 1);
         let _enter = span.enter();

         let err: InfraError = sqlx::Error::PoolTimedOut.into();

         assert!(matches!(err.kind(), InfraErrorKind::Database(_)));
         let trace_str = format!("{}", err.span_trace());
         assert!(
            trace_str.contains("test_ride_repo"),
            "SpanTrace がスパン名を含むこと: {trace_str}",
         );
      });
   }

   #[test]
   fn test_unexpectedでspan_traceがキャプチャされる() {
      with_error_layer(|| {
         let span = tracing::info_span!("test_restore");
         let _enter = span.enter();

         let err = InfraError::unexpected("不正な値");

         assert!(matches!(err.kind(), InfraErrorKind::Unexpected(msg) if msg == "不正な値"));
         assert!(format!("{}", err.span_trace()).contains("test_restore"));
      });
   }

   #[test]
   fn test_displayがinfra_error_kindのメッセージを出力する() {
      let err = InfraError::unexpected("rideID=1");
      assert_eq!(format!("{err}"), "予期しないエラー: rideID=1");
   }

   #[test]
   fn test_sourceがinfra_error_kindに委譲する() {
      use std::error::Error;

      let err: InfraError = sqlx::Error::RowNotFound.into();
      assert!(err.source().is_some());

      let err = InfraError::unexpected("source なし");
      assert!(err.source().is_none());
   }
}
