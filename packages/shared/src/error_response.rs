//! # エラーレスポンス
//!
//! 全エンドポイントで共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換とステータスコードの決定はサービスの責務
//! - エラーコードは定数で提供し、文字列のハードコードを排除
//!
//! ## JSON 形式
//!
//! ```json
//! {
//!   "error_code": "VALIDATION_ERROR",
//!   "message": "Id must be number"
//! }
//! ```

use serde::{Deserialize, Serialize};

/// 入力検証エラー
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";

/// 検索結果が 0 件
pub const RIDES_NOT_FOUND_ERROR: &str = "RIDES_NOT_FOUND_ERROR";

/// ストア障害など、サーバー側の失敗
pub const SERVER_ERROR: &str = "SERVER_ERROR";

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   pub error_code: String,
   pub message:    String,
}

impl ErrorResponse {
   /// 汎用コンストラクタ
   pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
      Self {
         error_code: error_code.into(),
         message:    message.into(),
      }
   }

   /// 入力検証エラー
   pub fn validation_error(message: impl Into<String>) -> Self {
      Self::new(VALIDATION_ERROR, message)
   }

   /// 配車記録が見つからない
   pub fn rides_not_found() -> Self {
      Self::new(RIDES_NOT_FOUND_ERROR, "Could not find any rides")
   }

   /// サーバーエラー
   ///
   /// message は固定値（内部情報を漏らさないため）。
   pub fn server_error() -> Self {
      Self::new(SERVER_ERROR, "Unknown error")
   }
}
