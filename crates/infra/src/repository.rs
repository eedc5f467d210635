//! # リポジトリ実装
//!
//! エンティティの永続化操作を抽象化するリポジトリトレイトと、
//! その PostgreSQL 実装を提供する。
//!
//! ## 設計方針
//!
//! リポジトリトレイトは保存・取得・更新・削除の最小限の操作のみを定義する。
//! 更新・削除は影響行数を返し、対象が存在しなかったかどうかの判断は
//! 呼び出し側（ユースケース層）に委ねる。

pub mod message_repository;
pub mod sticker_repository;

pub use message_repository::{MessageRepository, PostgresMessageRepository};
pub use sticker_repository::{PostgresStickerRepository, StickerRepository};
