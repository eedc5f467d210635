//! # メッセージ（トピック内の投稿）
//!
//! トピックに紐づく投稿本文を管理する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 要件 |
//! |---|------------|------|
//! | [`Message`] | メッセージ | トピックに投稿された本文。ID はストレージが採番 |
//! | [`NewMessage`] | メッセージドラフト | ID 未採番の作成前メッセージ |
//! | [`MessageContent`] | 本文 | 2〜2048 文字。空は不可 |
//!
//! ## 設計方針
//!
//! - **ID の採番はストレージ**: 作成前は [`NewMessage`]（ID なし）、作成後は
//!   [`Message`]（ID あり）と、採番状態を型で区別する
//! - **1 パス検証**: `parse` は全フィールドを検証し、違反をまとめて返す
//! - **トピックは外部所有**: トピック自体は別サービスが管理し、ここでは
//!   数値 ID（[`TopicId`]）としてのみ現れる
//!
//! ## 使用例
//!
//! ```rust
//! use fusen_domain::message::{MessageId, NewMessage};
//!
//! // 入力を検証してドラフトを作成
//! let draft = NewMessage::parse(Some(1), "こんにちは").unwrap();
//!
//! // ストレージが採番した ID を付与してエンティティ化
//! let message = draft.into_message(MessageId::from_i64(1));
//! assert_eq!(message.id().as_i64(), 1);
//! ```

use crate::{Violation, Violations};

define_entity_id! {
   /// メッセージ ID（一意識別子）
   pub struct MessageId;
}

define_entity_id! {
   /// トピック ID
   ///
   /// トピックは別サービスが所有するため、ここでは数値 ID としてのみ扱う。
   pub struct TopicId;
}

define_validated_string! {
   /// メッセージ本文（値オブジェクト）
   ///
   /// # バリデーション
   ///
   /// - 空文字列ではない（trim 後）
   /// - 2 文字以上 2048 文字以内
   pub struct MessageContent {
      field: "content",
      label: "本文",
      min_length: 2,
      max_length: 2048,
   }
}

/// メッセージエンティティ
///
/// # 不変条件
///
/// - 永続化されたメッセージは必ず ID を持つ（未採番の状態は [`NewMessage`]）
/// - ID はストレージが採番し、以後変更されない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
   id:       MessageId,
   topic_id: TopicId,
   content:  MessageContent,
}

impl Message {
   /// 更新入力を検証してエンティティを作成する
   ///
   /// ID は呼び出し元で解決済みのため、残りのフィールドを 1 パスで検証し、
   /// 違反があればすべてまとめて返す。
   pub fn parse(
      id: MessageId,
      topic_id: Option<i64>,
      content: &str,
   ) -> Result<Self, Violations> {
      let draft = NewMessage::parse(topic_id, content)?;
      Ok(draft.into_message(id))
   }

   /// 既存のデータからメッセージを復元する（データベースから取得時）
   pub fn from_db(id: MessageId, topic_id: TopicId, content: MessageContent) -> Self {
      Self {
         id,
         topic_id,
         content,
      }
   }

   // Getter メソッド

   pub fn id(&self) -> MessageId {
      self.id
   }

   pub fn topic_id(&self) -> TopicId {
      self.topic_id
   }

   pub fn content(&self) -> &MessageContent {
      &self.content
   }
}

/// メッセージドラフト（ID 未採番）
///
/// ID はストレージが採番するため、作成前のメッセージは ID を持たない。
/// [`NewMessage::into_message`] で採番済み ID を付与してエンティティ化する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
   topic_id: TopicId,
   content:  MessageContent,
}

impl NewMessage {
   /// 入力値を検証してドラフトを作成する
   ///
   /// 全フィールドを 1 パスで検証する。最初の違反で打ち切らず、
   /// すべての違反をフィールド宣言順に収集して返す。
   pub fn parse(topic_id: Option<i64>, content: &str) -> Result<Self, Violations> {
      let mut violations = Vec::new();

      let topic_id = match topic_id {
         Some(value) => Some(TopicId::from_i64(value)),
         None => {
            violations.push(Violation::required("topic_id", "トピック ID"));
            None
         }
      };

      let content = match MessageContent::new(content) {
         Ok(value) => Some(value),
         Err(violation) => {
            violations.push(violation);
            None
         }
      };

      match (topic_id, content) {
         (Some(topic_id), Some(content)) => Ok(Self { topic_id, content }),
         _ => Err(Violations::new(violations)),
      }
   }

   /// ストレージが採番した ID を付与してエンティティ化する
   pub fn into_message(self, id: MessageId) -> Message {
      Message {
         id,
         topic_id: self.topic_id,
         content: self.content,
      }
   }

   // Getter メソッド

   pub fn topic_id(&self) -> TopicId {
      self.topic_id
   }

   pub fn content(&self) -> &MessageContent {
      &self.content
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   // MessageContent のテスト

   #[rstest]
   #[case("こんにちは")]
   #[case("hi")] // 下限ちょうど（2 文字）
   fn test_有効な本文は受理される(#[case] input: &str) {
      let content = MessageContent::new(input).unwrap();
      assert_eq!(content.as_str(), input);
   }

   #[test]
   fn test_本文は前後の空白がtrimされる() {
      let content = MessageContent::new("  こんにちは  ").unwrap();
      assert_eq!(content.as_str(), "こんにちは");
   }

   #[rstest]
   #[case("")]
   #[case("   ")]
   fn test_空の本文はrequired違反のみを返す(#[case] input: &str) {
      let violation = MessageContent::new(input).unwrap_err();
      assert_eq!(violation.field, "content");
      assert_eq!(violation.code, "required");
   }

   #[test]
   fn test_1文字の本文はlength違反() {
      let violation = MessageContent::new("あ").unwrap_err();
      assert_eq!(violation.code, "length_out_of_range");
   }

   #[test]
   fn test_2048文字の本文は受理される() {
      let input = "あ".repeat(2048);
      assert!(MessageContent::new(input).is_ok());
   }

   #[test]
   fn test_2049文字の本文はlength違反() {
      let input = "あ".repeat(2049);
      let violation = MessageContent::new(input).unwrap_err();
      assert_eq!(violation.code, "length_out_of_range");
   }

   // NewMessage::parse のテスト

   #[test]
   fn test_有効な入力からドラフトが作成される() {
      let draft = NewMessage::parse(Some(7), "こんにちは").unwrap();

      assert_eq!(draft.topic_id(), TopicId::from_i64(7));
      assert_eq!(draft.content().as_str(), "こんにちは");
   }

   #[test]
   fn test_全フィールドの違反がまとめて返される() {
      let violations = NewMessage::parse(None, "").unwrap_err();

      let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
      assert_eq!(fields, vec!["topic_id", "content"]);
   }

   #[test]
   fn test_空の本文は違反1件のみ() {
      let violations = NewMessage::parse(Some(1), "").unwrap_err();

      assert_eq!(violations.len(), 1);
      let violation = violations.iter().next().unwrap();
      assert_eq!(violation.field, "content");
      assert_eq!(violation.code, "required");
   }

   #[test]
   fn test_トピックid未指定は違反1件のみ() {
      let violations = NewMessage::parse(None, "こんにちは").unwrap_err();

      assert_eq!(violations.len(), 1);
      let violation = violations.iter().next().unwrap();
      assert_eq!(violation.field, "topic_id");
      assert_eq!(violation.code, "required");
   }

   #[test]
   fn test_into_messageはフィールドを保持する() {
      let draft = NewMessage::parse(Some(7), "こんにちは").unwrap();
      let message = draft.into_message(MessageId::from_i64(1));

      let expected = Message::from_db(
         MessageId::from_i64(1),
         TopicId::from_i64(7),
         MessageContent::new("こんにちは").unwrap(),
      );
      assert_eq!(message, expected);
   }

   // Message::parse のテスト

   #[test]
   fn test_更新入力からエンティティが作成される() {
      let message = Message::parse(MessageId::from_i64(1), Some(7), "更新後の本文").unwrap();

      assert_eq!(message.id(), MessageId::from_i64(1));
      assert_eq!(message.topic_id(), TopicId::from_i64(7));
      assert_eq!(message.content().as_str(), "更新後の本文");
   }

   #[test]
   fn test_更新入力の違反もまとめて返される() {
      let violations = Message::parse(MessageId::from_i64(1), None, "x").unwrap_err();

      let codes: Vec<&str> = violations.iter().map(|v| v.code.as_str()).collect();
      assert_eq!(codes, vec!["required", "length_out_of_range"]);
   }
}
