//! # ステッカーリポジトリ
//!
//! ステッカーの永続化操作を提供する。

use async_trait::async_trait;
use fusen_domain::sticker::{
   NewSticker,
   Sticker,
   StickerId,
   StickerName,
};
use sqlx::PgPool;

use crate::error::InfraError;

/// ステッカーリポジトリ
///
/// ステッカーの永続化操作を抽象化する。
#[async_trait]
pub trait StickerRepository: Send + Sync {
   /// ステッカーを保存し、採番された ID を返す
   async fn create(&self, sticker: &NewSticker) -> Result<StickerId, InfraError>;

   /// ステッカーを削除し、影響行数を返す
   async fn delete_by_id(&self, id: StickerId) -> Result<u64, InfraError>;

   /// 全ステッカーを ID 昇順で取得する
   async fn find_all(&self) -> Result<Vec<Sticker>, InfraError>;

   /// ステッカーを ID で取得する
   async fn find_by_id(&self, id: StickerId) -> Result<Option<Sticker>, InfraError>;

   /// ステッカーを更新し、影響行数を返す
   async fn update(&self, sticker: &Sticker) -> Result<u64, InfraError>;
}

/// ステッカーテーブルの行
#[derive(sqlx::FromRow)]
struct StickerRow {
   id:   i64,
   name: String,
}

impl StickerRow {
   fn into_sticker(self) -> Result<Sticker, InfraError> {
      let name = StickerName::new(self.name).map_err(|e| {
         InfraError::unexpected(format!("不正なステッカー名が DB に存在します: {e}"))
      })?;

      Ok(Sticker::from_db(StickerId::from_i64(self.id), name))
   }
}

/// PostgreSQL を使用したステッカーリポジトリの実装
#[derive(Debug, Clone)]
pub struct PostgresStickerRepository {
   pool: PgPool,
}

impl PostgresStickerRepository {
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl StickerRepository for PostgresStickerRepository {
   #[tracing::instrument(skip_all, level = "debug")]
   async fn create(&self, sticker: &NewSticker) -> Result<StickerId, InfraError> {
      let id: i64 = sqlx::query_scalar(
         r#"
         INSERT INTO stickers (name)
         VALUES ($1)
         RETURNING id
         "#,
      )
      .bind(sticker.name().as_str())
      .fetch_one(&self.pool)
      .await?;

      Ok(StickerId::from_i64(id))
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn delete_by_id(&self, id: StickerId) -> Result<u64, InfraError> {
      let result = sqlx::query("DELETE FROM stickers WHERE id = $1")
         .bind(id.as_i64())
         .execute(&self.pool)
         .await?;

      Ok(result.rows_affected())
   }

   #[tracing::instrument(skip_all, level = "debug")]
   async fn find_all(&self) -> Result<Vec<Sticker>, InfraError> {
      let rows: Vec<StickerRow> = sqlx::query_as("SELECT id, name FROM stickers ORDER BY id")
         .fetch_all(&self.pool)
         .await?;

      rows.into_iter().map(StickerRow::into_sticker).collect()
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn find_by_id(&self, id: StickerId) -> Result<Option<Sticker>, InfraError> {
      let row: Option<StickerRow> = sqlx::query_as("SELECT id, name FROM stickers WHERE id = $1")
         .bind(id.as_i64())
         .fetch_optional(&self.pool)
         .await?;

      let Some(row) = row else {
         return Ok(None);
      };

      Ok(Some(row.into_sticker()?))
   }

   #[tracing::instrument(skip_all, level = "debug", fields(id = %sticker.id()))]
   async fn update(&self, sticker: &Sticker) -> Result<u64, InfraError> {
      let result = sqlx::query("UPDATE stickers SET name = $2 WHERE id = $1")
         .bind(sticker.id().as_i64())
         .bind(sticker.name().as_str())
         .execute(&self.pool)
         .await?;

      Ok(result.rows_affected())
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_トレイトはsendとsyncを実装している() {
      fn assert_send_sync<T: Send + Sync>() {}

      assert_send_sync::<PostgresStickerRepository>();
   }
}
