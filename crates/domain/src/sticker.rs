//! # ステッカー（名前付きラベル）
//!
//! トピックやメッセージに貼り付ける名前付きラベルを管理する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 要件 |
//! |---|------------|------|
//! | [`Sticker`] | ステッカー | 名前を持つラベル。ID はストレージが採番 |
//! | [`NewSticker`] | ステッカードラフト | ID 未採番の作成前ステッカー |
//! | [`StickerName`] | ステッカー名 | 2〜32 文字。空は不可 |
//!
//! ## 設計方針
//!
//! [`crate::message`] と同じパターン: 採番状態を型で区別し、検証は 1 パスで
//! 全違反を収集する。

use crate::Violations;

define_entity_id! {
   /// ステッカー ID（一意識別子）
   pub struct StickerId;
}

define_validated_string! {
   /// ステッカー名（値オブジェクト）
   ///
   /// # バリデーション
   ///
   /// - 空文字列ではない（trim 後）
   /// - 2 文字以上 32 文字以内
   pub struct StickerName {
      field: "name",
      label: "ステッカー名",
      min_length: 2,
      max_length: 32,
   }
}

/// ステッカーエンティティ
///
/// # 不変条件
///
/// - 永続化されたステッカーは必ず ID を持つ（未採番の状態は [`NewSticker`]）
/// - ID はストレージが採番し、以後変更されない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sticker {
   id:   StickerId,
   name: StickerName,
}

impl Sticker {
   /// 更新入力を検証してエンティティを作成する
   pub fn parse(id: StickerId, name: &str) -> Result<Self, Violations> {
      let draft = NewSticker::parse(name)?;
      Ok(draft.into_sticker(id))
   }

   /// 既存のデータからステッカーを復元する（データベースから取得時）
   pub fn from_db(id: StickerId, name: StickerName) -> Self {
      Self { id, name }
   }

   // Getter メソッド

   pub fn id(&self) -> StickerId {
      self.id
   }

   pub fn name(&self) -> &StickerName {
      &self.name
   }
}

/// ステッカードラフト（ID 未採番）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSticker {
   name: StickerName,
}

impl NewSticker {
   /// 入力値を検証してドラフトを作成する
   ///
   /// フィールドは name のみだが、違反の返し方はメッセージと同じく
   /// コレクションに揃える。
   pub fn parse(name: &str) -> Result<Self, Violations> {
      match StickerName::new(name) {
         Ok(name) => Ok(Self { name }),
         Err(violation) => Err(Violations::new(vec![violation])),
      }
   }

   /// ストレージが採番した ID を付与してエンティティ化する
   pub fn into_sticker(self, id: StickerId) -> Sticker {
      Sticker { id, name: self.name }
   }

   pub fn name(&self) -> &StickerName {
      &self.name
   }
}
