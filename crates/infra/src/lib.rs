//! # Fusen インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! このクレートはリポジトリトレイトとその具体的な実装を提供する。
//! 外部システムの詳細をカプセル化し、ドメイン層をインフラの変更から保護する。
//!
//! ## 責務
//!
//! - **データベース接続**: PostgreSQL への接続プール管理とマイグレーション
//! - **リポジトリ実装**: メッセージ・ステッカーの永続化操作
//! - **モックリポジトリ**: ユースケーステスト用のインメモリ実装
//!   （`test-utils` feature）
//!
//! ## 依存関係
//!
//! ```text
//! board-service → infra → domain
//! ```
//!
//! インフラ層は `domain` に依存する。
//! ドメイン層はインフラ層に依存しない（依存性逆転の原則）。
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL データベース接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリ実装
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use fusen_infra::{db, repository::PostgresMessageRepository};
//!
//! async fn setup() -> Result<(), Box<dyn std::error::Error>> {
//!     // データベース接続プールの作成
//!     let pool = db::create_pool("postgres://localhost/fusen").await?;
//!     db::run_migrations(&pool).await?;
//!
//!     let repository = PostgresMessageRepository::new(pool);
//!
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::InfraError;
