//! # Fusen ドメイン層
//!
//! 掲示板サービスのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! このクレートは DDD（ドメイン駆動設計）の原則に従い、以下を提供する:
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（例: Message, Sticker）
//! - **ドラフト**: ID 未採番の作成前オブジェクト（例: NewMessage）。ID は
//!   ストレージが採番するため、作成前の状態を型で区別する
//! - **値オブジェクト**: 生成時に検証される不変オブジェクト（例:
//!   MessageContent）
//! - **バリデーション違反**: 入力検証の失敗をフィールド単位で表現する型
//!
//! ## 依存関係の方向
//!
//! ```text
//! board-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、外部サービス）に一切依存しない。
//! これにより、ビジネスロジックの純粋性が保たれる。
//!
//! ## モジュール構成
//!
//! - [`message`] - メッセージ（トピック内の投稿）
//! - [`sticker`] - ステッカー（名前付きラベル）
//! - [`validation`] - フィールド単位のバリデーション違反
//!
//! ## 使用例
//!
//! ```rust
//! use fusen_domain::message::NewMessage;
//!
//! // 入力を 1 パスで検証し、ドラフトを作成する
//! let draft = NewMessage::parse(Some(1), "こんにちは").unwrap();
//! assert_eq!(draft.content().as_str(), "こんにちは");
//!
//! // 違反はすべてまとめて返される
//! let violations = NewMessage::parse(None, "").unwrap_err();
//! assert_eq!(violations.len(), 2);
//! ```

#[macro_use]
mod macros;

pub mod message;
pub mod sticker;
pub mod validation;

pub use validation::{Violation, Violations};
