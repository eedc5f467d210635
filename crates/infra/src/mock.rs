//! # テスト用モックリポジトリ
//!
//! ユースケーステストで使用するインメモリモックリポジトリ。
//!
//! ## 設計方針
//!
//! `Arc<Mutex<Vec<_>>>` に保持した内容に対して各操作を実装する。
//! ID は既存の最大値 + 1 で採番し、データベースのシーケンスと同じ
//! 振る舞いを再現する。

use std::sync::{
   Arc,
   Mutex,
};

use async_trait::async_trait;
use fusen_domain::{
   message::{
      Message,
      MessageId,
      NewMessage,
   },
   sticker::{
      NewSticker,
      Sticker,
      StickerId,
   },
};

use crate::{
   error::InfraError,
   repository::{
      MessageRepository,
      StickerRepository,
   },
};

// ===== MockMessageRepository =====

/// メッセージリポジトリのモック実装
#[derive(Clone, Default)]
pub struct MockMessageRepository {
   messages: Arc<Mutex<Vec<Message>>>,
}

impl MockMessageRepository {
   pub fn new() -> Self {
      Self::default()
   }

   /// 保存済みメッセージを追加する
   pub fn add_message(&self, message: Message) {
      self.messages.lock().unwrap().push(message);
   }

   /// 保存されているメッセージ数を返す
   pub fn stored_count(&self) -> usize {
      self.messages.lock().unwrap().len()
   }
}

#[async_trait]
impl MessageRepository for MockMessageRepository {
   async fn create(&self, message: &NewMessage) -> Result<MessageId, InfraError> {
      let mut messages = self.messages.lock().unwrap();
      let max_id = messages.iter().map(|m| m.id().as_i64()).max().unwrap_or(0);
      let id = MessageId::from_i64(max_id + 1);
      messages.push(message.clone().into_message(id));

      Ok(id)
   }

   async fn delete_by_id(&self, id: MessageId) -> Result<u64, InfraError> {
      let mut messages = self.messages.lock().unwrap();
      let before = messages.len();
      messages.retain(|m| m.id() != id);

      Ok((before - messages.len()) as u64)
   }

   async fn find_all(&self) -> Result<Vec<Message>, InfraError> {
      let mut messages = self.messages.lock().unwrap().clone();
      messages.sort_by_key(|m| m.id().as_i64());

      Ok(messages)
   }

   async fn find_by_id(&self, id: MessageId) -> Result<Option<Message>, InfraError> {
      let messages = self.messages.lock().unwrap();

      Ok(messages.iter().find(|m| m.id() == id).cloned())
   }

   async fn update(&self, message: &Message) -> Result<u64, InfraError> {
      let mut messages = self.messages.lock().unwrap();

      match messages.iter().position(|m| m.id() == message.id()) {
         Some(index) => {
            messages[index] = message.clone();
            Ok(1)
         }
         None => Ok(0),
      }
   }
}

// ===== MockStickerRepository =====

/// ステッカーリポジトリのモック実装
#[derive(Clone, Default)]
pub struct MockStickerRepository {
   stickers: Arc<Mutex<Vec<Sticker>>>,
}

impl MockStickerRepository {
   pub fn new() -> Self {
      Self::default()
   }

   /// 保存済みステッカーを追加する
   pub fn add_sticker(&self, sticker: Sticker) {
      self.stickers.lock().unwrap().push(sticker);
   }

   /// 保存されているステッカー数を返す
   pub fn stored_count(&self) -> usize {
      self.stickers.lock().unwrap().len()
   }
}

#[async_trait]
impl StickerRepository for MockStickerRepository {
   async fn create(&self, sticker: &NewSticker) -> Result<StickerId, InfraError> {
      let mut stickers = self.stickers.lock().unwrap();
      let max_id = stickers.iter().map(|s| s.id().as_i64()).max().unwrap_or(0);
      let id = StickerId::from_i64(max_id + 1);
      stickers.push(sticker.clone().into_sticker(id));

      Ok(id)
   }

   async fn delete_by_id(&self, id: StickerId) -> Result<u64, InfraError> {
      let mut stickers = self.stickers.lock().unwrap();
      let before = stickers.len();
      stickers.retain(|s| s.id() != id);

      Ok((before - stickers.len()) as u64)
   }

   async fn find_all(&self) -> Result<Vec<Sticker>, InfraError> {
      let mut stickers = self.stickers.lock().unwrap().clone();
      stickers.sort_by_key(|s| s.id().as_i64());

      Ok(stickers)
   }

   async fn find_by_id(&self, id: StickerId) -> Result<Option<Sticker>, InfraError> {
      let stickers = self.stickers.lock().unwrap();

      Ok(stickers.iter().find(|s| s.id() == id).cloned())
   }

   async fn update(&self, sticker: &Sticker) -> Result<u64, InfraError> {
      let mut stickers = self.stickers.lock().unwrap();

      match stickers.iter().position(|s| s.id() == sticker.id()) {
         Some(index) => {
            stickers[index] = sticker.clone();
            Ok(1)
         }
         None => Ok(0),
      }
   }
}
