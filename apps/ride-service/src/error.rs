//! # Ride Service エラー定義
//!
//! サービス固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## マッピング
//!
//! | CoreError | HTTP Status | error_code |
//! |-----------|-------------|------------|
//! | Validation | 200 | `VALIDATION_ERROR` |
//! | NotFound | 200 | `RIDES_NOT_FOUND_ERROR` |
//! | Database | 500 | `SERVER_ERROR` |
//!
//! 検証エラーと 0 件は呼び出し側への通知であり、失敗ではないため
//! 200 のままレスポンスボディで伝える。ストア障害のみ 5xx とする。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use ridebook_domain::ValidationError;
use ridebook_infra::InfraError;
use ridebook_shared::ErrorResponse;
use thiserror::Error;

/// Ride Service で発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
   /// 入力検証エラー（最初に違反した制約のみ）
   #[error("バリデーションエラー: {0}")]
   Validation(#[from] ValidationError),

   /// 検索結果が 0 件
   #[error("配車記録が見つかりません")]
   NotFound,

   /// データベースエラー
   #[error("データベースエラー: {0}")]
   Database(#[from] InfraError),
}

impl IntoResponse for CoreError {
   fn into_response(self) -> Response {
      let (status, body) = match &self {
         CoreError::Validation(e) => (StatusCode::OK, ErrorResponse::validation_error(e.to_string())),
         CoreError::NotFound => (StatusCode::OK, ErrorResponse::rides_not_found()),
         CoreError::Database(e) => {
            // 内部エラーの詳細はログにのみ出力する
            tracing::error!(
               error = %e,
               span_trace = %e.span_trace(),
               "ストア操作に失敗しました"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::server_error())
         }
      };

      (status, Json(body)).into_response()
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   async fn into_parts(error: CoreError) -> (StatusCode, ErrorResponse) {
      let response = error.into_response();
      let status = response.status();
      let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
         .await
         .unwrap();
      (status, serde_json::from_slice(&bytes).unwrap())
   }

   #[tokio::test]
   async fn test_検証エラーは200とvalidation_errorを返す() {
      let (status, body) = into_parts(ValidationError::InvalidRideId.into()).await;

      assert_eq!(status, StatusCode::OK);
      assert_eq!(body, ErrorResponse::validation_error("Id must be number"));
   }

   #[tokio::test]
   async fn test_not_foundは200とrides_not_found_errorを返す() {
      let (status, body) = into_parts(CoreError::NotFound).await;

      assert_eq!(status, StatusCode::OK);
      assert_eq!(body, ErrorResponse::rides_not_found());
   }

   #[tokio::test]
   async fn test_ストア障害は500と固定メッセージを返す() {
      let (status, body) = into_parts(InfraError::unexpected("接続失敗").into()).await;

      assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
      assert_eq!(body, ErrorResponse::server_error());
   }
}
