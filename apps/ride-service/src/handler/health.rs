//! # ヘルスチェックハンドラ
//!
//! ロードバランサーやコンテナオーケストレーターの liveness probe 用エンドポイント。
//!
//! ```text
//! GET /health
//! ```

/// ヘルスチェックエンドポイント
///
/// ストアへの接続は確認せず、プロセスの稼働のみを示す。
/// 常に `200 OK` とプレーンテキスト `Healthy` を返す。
pub async fn health_check() -> &'static str {
   "Healthy"
}
