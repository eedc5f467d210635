//! # メッセージリポジトリ
//!
//! メッセージの永続化操作を提供する。

use async_trait::async_trait;
use fusen_domain::message::{
    Message,
    MessageContent,
    MessageId,
    NewMessage,
    TopicId,
};
use sqlx::PgPool;

use crate::error::InfraError;

/// メッセージリポジトリ
///
/// メッセージの永続化操作を抽象化する。
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// メッセージを保存し、採番された ID を返す
    async fn create(&self, message: &NewMessage) -> Result<MessageId, InfraError>;

    /// メッセージを削除し、影響行数を返す
    async fn delete_by_id(&self, id: MessageId) -> Result<u64, InfraError>;

    /// 全メッセージを ID 昇順で取得する
    async fn find_all(&self) -> Result<Vec<Message>, InfraError>;

    /// メッセージを ID で取得する
    async fn find_by_id(&self, id: MessageId) -> Result<Option<Message>, InfraError>;

    /// メッセージを更新し、影響行数を返す
    async fn update(&self, message: &Message) -> Result<u64, InfraError>;
}

/// メッセージテーブルの行
#[derive(sqlx::FromRow)]
struct MessageRow {
    id:       i64,
    topic_id: i64,
    content:  String,
}

impl MessageRow {
    fn into_message(self) -> Result<Message, InfraError> {
        let content = MessageContent::new(self.content)
            .map_err(|e| InfraError::unexpected(format!("不正な本文が DB に存在します: {e}")))?;

        Ok(Message::from_db(
            MessageId::from_i64(self.id),
            TopicId::from_i64(self.topic_id),
            content,
        ))
    }
}

/// PostgreSQL を使用したメッセージリポジトリの実装
#[derive(Debug, Clone)]
pub struct PostgresMessageRepository {
    pool: PgPool,
}

impl PostgresMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PostgresMessageRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn create(&self, message: &NewMessage) -> Result<MessageId, InfraError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO messages (topic_id, content)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(message.topic_id().as_i64())
        .bind(message.content().as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(MessageId::from_i64(id))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete_by_id(&self, id: MessageId) -> Result<u64, InfraError> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Message>, InfraError> {
        let rows: Vec<MessageRow> =
            sqlx::query_as("SELECT id, topic_id, content FROM messages ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(MessageRow::into_message).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: MessageId) -> Result<Option<Message>, InfraError> {
        let row: Option<MessageRow> =
            sqlx::query_as("SELECT id, topic_id, content FROM messages WHERE id = $1")
                .bind(id.as_i64())
                .fetch_optional(&self.pool)
                .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(row.into_message()?))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %message.id()))]
    async fn update(&self, message: &Message) -> Result<u64, InfraError> {
        let result = sqlx::query(
            r#"
            UPDATE messages
            SET topic_id = $2, content = $3
            WHERE id = $1
            "#,
        )
        .bind(message.id().as_i64())
        .bind(message.topic_id().as_i64())
        .bind(message.content().as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
