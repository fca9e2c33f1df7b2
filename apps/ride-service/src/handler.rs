//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置し、ここで re-export する
//! - ハンドラは薄く保ち、入力の解釈と検証はユースケース・ドメイン層に委譲
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs          # 親モジュール（re-export）
//! └── handler/
//!     ├── health.rs   # ヘルスチェック
//!     └── ride.rs     # 配車記録
//! ```

pub mod health;
pub mod ride;

pub use health::health_check;
pub use ride::{RideState, create_ride, get_ride, list_rides};
