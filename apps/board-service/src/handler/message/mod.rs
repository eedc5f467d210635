//! # メッセージハンドラ
//!
//! Board Service のメッセージ API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /api/v1.0/messages` - メッセージ一覧
//! - `GET /api/v1.0/messages/{id}` - メッセージ取得
//! - `POST /api/v1.0/messages` - メッセージ作成
//! - `PUT /api/v1.0/messages` - メッセージ更新
//! - `DELETE /api/v1.0/messages/{id}` - メッセージ削除

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   http::StatusCode,
   response::IntoResponse,
};
use fusen_domain::{
   message::{Message, MessageId},
   validation::{Violation, Violations},
};
use fusen_shared::ApiResponse;
use serde::{Deserialize, Serialize};

use crate::{
   error::BoardError,
   usecase::{CreateMessageInput, MessageUseCaseImpl, UpdateMessageInput},
};

/// メッセージ API の共有状態
pub struct MessageState {
   pub usecase: MessageUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// メッセージ DTO
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageDto {
   pub id:       i64,
   pub topic_id: i64,
   pub content:  String,
}

impl From<&Message> for MessageDto {
   fn from(message: &Message) -> Self {
      Self {
         id:       message.id().as_i64(),
         topic_id: message.topic_id().as_i64(),
         content:  message.content().as_str().to_string(),
      }
   }
}

/// メッセージ作成リクエスト
///
/// 欠落フィールドは 422 にせず、ドメイン検証の required 違反として報告する。
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateMessageRequest {
   pub topic_id: Option<i64>,
   pub content:  String,
}

/// メッセージ更新リクエスト
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateMessageRequest {
   pub id:       Option<i64>,
   pub topic_id: Option<i64>,
   pub content:  String,
}

// --- ハンドラ ---

/// GET /api/v1.0/messages
///
/// メッセージ一覧を ID 昇順で取得する。
///
/// ## レスポンス
///
/// - `200 OK`: メッセージ一覧（0 件の場合は空配列）
#[tracing::instrument(skip_all)]
pub async fn list_messages(
   State(state): State<Arc<MessageState>>,
) -> Result<impl IntoResponse, BoardError> {
   let messages = state.usecase.list_messages().await?;

   let items: Vec<MessageDto> = messages.iter().map(MessageDto::from).collect();

   Ok((StatusCode::OK, Json(ApiResponse::new(items))))
}

/// GET /api/v1.0/messages/{id}
///
/// メッセージを取得する。
///
/// ## レスポンス
///
/// - `200 OK`: メッセージ
/// - `404 Not Found`: メッセージが見つからない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_message(
   State(state): State<Arc<MessageState>>,
   Path(id): Path<i64>,
) -> Result<impl IntoResponse, BoardError> {
   let message = state.usecase.get_message(MessageId::from_i64(id)).await?;

   Ok((StatusCode::OK, Json(ApiResponse::new(MessageDto::from(&message)))))
}

/// POST /api/v1.0/messages
///
/// メッセージを作成する。
///
/// ## レスポンス
///
/// - `201 Created`: 作成されたメッセージ（採番された ID 付き）
/// - `400 Bad Request`: 入力値の検証エラー
#[tracing::instrument(skip_all)]
pub async fn create_message(
   State(state): State<Arc<MessageState>>,
   Json(req): Json<CreateMessageRequest>,
) -> Result<impl IntoResponse, BoardError> {
   let input = CreateMessageInput {
      topic_id: req.topic_id,
      content:  req.content,
   };

   let message = state.usecase.create_message(input).await?;

   Ok((
      StatusCode::CREATED,
      Json(ApiResponse::new(MessageDto::from(&message))),
   ))
}

/// PUT /api/v1.0/messages
///
/// メッセージを更新する。更新対象の ID はリクエストボディで指定する。
///
/// ## レスポンス
///
/// - `200 OK`: 更新後のメッセージ
/// - `400 Bad Request`: 入力値の検証エラー（ID 欠落を含む）
/// - `404 Not Found`: メッセージが見つからない
#[tracing::instrument(skip_all)]
pub async fn update_message(
   State(state): State<Arc<MessageState>>,
   Json(req): Json<UpdateMessageRequest>,
) -> Result<impl IntoResponse, BoardError> {
   let Some(id) = req.id else {
      return Err(BoardError::Validation(Violations::new(vec![
         Violation::required("id", "メッセージ ID"),
      ])));
   };

   let input = UpdateMessageInput {
      id:       MessageId::from_i64(id),
      topic_id: req.topic_id,
      content:  req.content,
   };

   let message = state.usecase.update_message(input).await?;

   Ok((StatusCode::OK, Json(ApiResponse::new(MessageDto::from(&message)))))
}

/// DELETE /api/v1.0/messages/{id}
///
/// メッセージを削除する。
///
/// ## レスポンス
///
/// - `204 No Content`: 削除成功
/// - `404 Not Found`: メッセージが見つからない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_message(
   State(state): State<Arc<MessageState>>,
   Path(id): Path<i64>,
) -> Result<impl IntoResponse, BoardError> {
   state.usecase.delete_message(MessageId::from_i64(id)).await?;

   Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests;
