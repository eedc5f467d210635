//! メッセージユースケース

use std::sync::Arc;

use fusen_domain::message::{Message, MessageId, NewMessage};
use fusen_infra::repository::MessageRepository;

use crate::{
   error::{BoardError, EntityKind},
   usecase::helpers::{FindResultExt, ensure_affected},
};

/// メッセージ作成の入力
pub struct CreateMessageInput {
   pub topic_id: Option<i64>,
   pub content:  String,
}

/// メッセージ更新の入力
pub struct UpdateMessageInput {
   pub id:       MessageId,
   pub topic_id: Option<i64>,
   pub content:  String,
}

/// メッセージユースケース
#[derive(Clone)]
pub struct MessageUseCaseImpl {
   message_repository: Arc<dyn MessageRepository>,
}

impl MessageUseCaseImpl {
   pub fn new(message_repository: Arc<dyn MessageRepository>) -> Self {
      Self { message_repository }
   }

   /// 全メッセージを ID 昇順で取得する
   ///
   /// メッセージが 1 件もない場合は空の Vec を返す（エラーではない）。
   pub async fn list_messages(&self) -> Result<Vec<Message>, BoardError> {
      Ok(self.message_repository.find_all().await?)
   }

   /// メッセージを ID で取得する
   pub async fn get_message(&self, id: MessageId) -> Result<Message, BoardError> {
      self.message_repository
         .find_by_id(id)
         .await
         .or_not_found(EntityKind::Message, id.as_i64())
   }

   /// メッセージを作成する
   ///
   /// ## 処理フロー
   ///
   /// 1. 入力を検証し、違反があればすべてまとめて返す（この時点では保存しない）
   /// 2. リポジトリに保存し、採番された ID を受け取る
   /// 3. ID を付与したエンティティを返す
   pub async fn create_message(&self, input: CreateMessageInput) -> Result<Message, BoardError> {
      let draft = NewMessage::parse(input.topic_id, &input.content)?;

      let id = self.message_repository.create(&draft).await?;

      Ok(draft.into_message(id))
   }

   /// メッセージを更新する
   ///
   /// 事前の存在確認は行わず、影響行数 0 を Not Found として扱う
   /// （取得と更新の 2 回アクセスを 1 回に抑える）。
   pub async fn update_message(&self, input: UpdateMessageInput) -> Result<Message, BoardError> {
      let message = Message::parse(input.id, input.topic_id, &input.content)?;

      let affected = self.message_repository.update(&message).await?;
      ensure_affected(affected, EntityKind::Message, message.id().as_i64())?;

      Ok(message)
   }

   /// メッセージを削除する
   pub async fn delete_message(&self, id: MessageId) -> Result<(), BoardError> {
      let affected = self.message_repository.delete_by_id(id).await?;
      ensure_affected(affected, EntityKind::Message, id.as_i64())
   }
}
