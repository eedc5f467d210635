//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ビジネスロジックは usecase 層に委譲
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック（liveness / readiness）
//! - `message`: メッセージ CRUD
//! - `sticker`: ステッカー CRUD

pub mod health;
pub mod message;
pub mod sticker;

pub use health::{ReadinessState, health_check, readiness_check};
pub use message::{
    MessageState,
    create_message,
    delete_message,
    get_message,
    list_messages,
    update_message,
};
pub use sticker::{
    StickerState,
    create_sticker,
    delete_sticker,
    get_sticker,
    list_stickers,
    update_sticker,
};
