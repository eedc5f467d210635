//! # ユースケース層
//!
//! Board Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **検証が先**: 入力の検証に通らない限りリポジトリには触れない
//! - **薄いハンドラ**: ハンドラは薄く保ち、ロジックはユースケースに集約
//!
//! ## モジュール構成
//!
//! - `message`: メッセージの CRUD ユースケース
//! - `sticker`: ステッカーの CRUD ユースケース

pub(crate) mod helpers;

pub mod message;
pub mod sticker;

pub use message::{CreateMessageInput, MessageUseCaseImpl, UpdateMessageInput};
pub use sticker::{CreateStickerInput, StickerUseCaseImpl, UpdateStickerInput};
