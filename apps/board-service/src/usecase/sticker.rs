//! ステッカーユースケース

use std::sync::Arc;

use fusen_domain::sticker::{NewSticker, Sticker, StickerId};
use fusen_infra::repository::StickerRepository;

use crate::{
   error::{BoardError, EntityKind},
   usecase::helpers::{FindResultExt, ensure_affected},
};

/// ステッカー作成の入力
pub struct CreateStickerInput {
   pub name: String,
}

/// ステッカー更新の入力
pub struct UpdateStickerInput {
   pub id:   StickerId,
   pub name: String,
}

/// ステッカーユースケース
#[derive(Clone)]
pub struct StickerUseCaseImpl {
   sticker_repository: Arc<dyn StickerRepository>,
}

impl StickerUseCaseImpl {
   pub fn new(sticker_repository: Arc<dyn StickerRepository>) -> Self {
      Self { sticker_repository }
   }

   /// 全ステッカーを ID 昇順で取得する
   pub async fn list_stickers(&self) -> Result<Vec<Sticker>, BoardError> {
      Ok(self.sticker_repository.find_all().await?)
   }

   /// ステッカーを ID で取得する
   pub async fn get_sticker(&self, id: StickerId) -> Result<Sticker, BoardError> {
      self.sticker_repository
         .find_by_id(id)
         .await
         .or_not_found(EntityKind::Sticker, id.as_i64())
   }

   /// ステッカーを作成する
   ///
   /// 入力の検証に通った場合のみリポジトリに保存し、
   /// 採番された ID を付与したエンティティを返す。
   pub async fn create_sticker(&self, input: CreateStickerInput) -> Result<Sticker, BoardError> {
      let draft = NewSticker::parse(&input.name)?;

      let id = self.sticker_repository.create(&draft).await?;

      Ok(draft.into_sticker(id))
   }

   /// ステッカーを更新する
   ///
   /// 事前の存在確認は行わず、影響行数 0 を Not Found として扱う。
   pub async fn update_sticker(&self, input: UpdateStickerInput) -> Result<Sticker, BoardError> {
      let sticker = Sticker::parse(input.id, &input.name)?;

      let affected = self.sticker_repository.update(&sticker).await?;
      ensure_affected(affected, EntityKind::Sticker, sticker.id().as_i64())?;

      Ok(sticker)
   }

   /// ステッカーを削除する
   pub async fn delete_sticker(&self, id: StickerId) -> Result<(), BoardError> {
      let affected = self.sticker_repository.delete_by_id(id).await?;
      ensure_affected(affected, EntityKind::Sticker, id.as_i64())
   }
}
