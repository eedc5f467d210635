//! # ステッカーハンドラ
//!
//! Board Service のステッカー API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /api/v1.0/stickers` - ステッカー一覧
//! - `GET /api/v1.0/stickers/{id}` - ステッカー取得
//! - `POST /api/v1.0/stickers` - ステッカー作成
//! - `PUT /api/v1.0/stickers` - ステッカー更新
//! - `DELETE /api/v1.0/stickers/{id}` - ステッカー削除

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   http::StatusCode,
   response::IntoResponse,
};
use fusen_domain::{
   sticker::{Sticker, StickerId},
   validation::{Violation, Violations},
};
use fusen_shared::ApiResponse;
use serde::{Deserialize, Serialize};

use crate::{
   error::BoardError,
   usecase::{CreateStickerInput, StickerUseCaseImpl, UpdateStickerInput},
};

/// ステッカー API の共有状態
pub struct StickerState {
   pub usecase: StickerUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// ステッカー DTO
#[derive(Debug, Serialize, Deserialize)]
pub struct StickerDto {
   pub id:   i64,
   pub name: String,
}

impl From<&Sticker> for StickerDto {
   fn from(sticker: &Sticker) -> Self {
      Self {
         id:   sticker.id().as_i64(),
         name: sticker.name().as_str().to_string(),
      }
   }
}

/// ステッカー作成リクエスト
///
/// 欠落フィールドは 422 にせず、ドメイン検証の required 違反として報告する。
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateStickerRequest {
   pub name: String,
}

/// ステッカー更新リクエスト
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateStickerRequest {
   pub id:   Option<i64>,
   pub name: String,
}

// --- ハンドラ ---

/// GET /api/v1.0/stickers
///
/// ステッカー一覧を ID 昇順で取得する。
#[tracing::instrument(skip_all)]
pub async fn list_stickers(
   State(state): State<Arc<StickerState>>,
) -> Result<impl IntoResponse, BoardError> {
   let stickers = state.usecase.list_stickers().await?;

   let items: Vec<StickerDto> = stickers.iter().map(StickerDto::from).collect();

   Ok((StatusCode::OK, Json(ApiResponse::new(items))))
}

/// GET /api/v1.0/stickers/{id}
///
/// ステッカーを取得する。
///
/// ## レスポンス
///
/// - `200 OK`: ステッカー
/// - `404 Not Found`: ステッカーが見つからない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_sticker(
   State(state): State<Arc<StickerState>>,
   Path(id): Path<i64>,
) -> Result<impl IntoResponse, BoardError> {
   let sticker = state.usecase.get_sticker(StickerId::from_i64(id)).await?;

   Ok((StatusCode::OK, Json(ApiResponse::new(StickerDto::from(&sticker)))))
}

/// POST /api/v1.0/stickers
///
/// ステッカーを作成する。
///
/// ## レスポンス
///
/// - `201 Created`: 作成されたステッカー（採番された ID 付き）
/// - `400 Bad Request`: 入力値の検証エラー
#[tracing::instrument(skip_all)]
pub async fn create_sticker(
   State(state): State<Arc<StickerState>>,
   Json(req): Json<CreateStickerRequest>,
) -> Result<impl IntoResponse, BoardError> {
   let input = CreateStickerInput { name: req.name };

   let sticker = state.usecase.create_sticker(input).await?;

   Ok((
      StatusCode::CREATED,
      Json(ApiResponse::new(StickerDto::from(&sticker))),
   ))
}

/// PUT /api/v1.0/stickers
///
/// ステッカーを更新する。更新対象の ID はリクエストボディで指定する。
///
/// ## レスポンス
///
/// - `200 OK`: 更新後のステッカー
/// - `400 Bad Request`: 入力値の検証エラー（ID 欠落を含む）
/// - `404 Not Found`: ステッカーが見つからない
#[tracing::instrument(skip_all)]
pub async fn update_sticker(
   State(state): State<Arc<StickerState>>,
   Json(req): Json<UpdateStickerRequest>,
) -> Result<impl IntoResponse, BoardError> {
   let Some(id) = req.id else {
      return Err(BoardError::Validation(Violations::new(vec![
         Violation::required("id", "ステッカー ID"),
      ])));
   };

   let input = UpdateStickerInput {
      id:   StickerId::from_i64(id),
      name: req.name,
   };

   let sticker = state.usecase.update_sticker(input).await?;

   Ok((StatusCode::OK, Json(ApiResponse::new(StickerDto::from(&sticker)))))
}

/// DELETE /api/v1.0/stickers/{id}
///
/// ステッカーを削除する。
///
/// ## レスポンス
///
/// - `204 No Content`: 削除成功
/// - `404 Not Found`: ステッカーが見つからない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_sticker(
   State(state): State<Arc<StickerState>>,
   Path(id): Path<i64>,
) -> Result<impl IntoResponse, BoardError> {
   state.usecase.delete_sticker(StickerId::from_i64(id)).await?;

   Ok(StatusCode::NO_CONTENT)
}
