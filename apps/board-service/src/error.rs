//! # Board Service エラー定義
//!
//! Board Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! エラーレスポンスの形式は RFC 9457 Problem Details
//! （[`fusen_shared::ErrorResponse`]）に統一する。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use fusen_domain::validation::Violations;
use fusen_infra::InfraError;
use fusen_shared::{ErrorResponse, FieldViolation};
use thiserror::Error;

/// エラーの対象となるエンティティ種別
///
/// Not Found レスポンスの `type` URI（`message-not-found` など）と
/// detail の日本語表示名を導出する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
   Message,
   Sticker,
}

impl EntityKind {
   /// detail 用の日本語表示名
   pub fn label(self) -> &'static str {
      match self {
         EntityKind::Message => "メッセージ",
         EntityKind::Sticker => "ステッカー",
      }
   }

   /// Not Found レスポンスの title
   fn not_found_title(self) -> &'static str {
      match self {
         EntityKind::Message => "Message Not Found",
         EntityKind::Sticker => "Sticker Not Found",
      }
   }
}

/// Board Service で発生するエラー
#[derive(Debug, Error)]
pub enum BoardError {
   /// 入力値の検証エラー
   #[error("入力値が不正です: {0}")]
   Validation(#[from] Violations),

   /// リソースが見つからない
   #[error("{}が見つかりません (ID: {id})", kind.label())]
   NotFound { kind: EntityKind, id: i64 },

   /// データベースエラー
   #[error("データベースエラー: {0}")]
   Database(#[from] InfraError),
}

impl IntoResponse for BoardError {
   fn into_response(self) -> Response {
      match self {
         BoardError::Validation(violations) => {
            let violations = violations
               .iter()
               .map(|v| FieldViolation {
                  field:   v.field.clone(),
                  code:    v.code.clone(),
                  message: v.message.clone(),
               })
               .collect();
            (
               StatusCode::BAD_REQUEST,
               Json(ErrorResponse::validation_error("入力値が不正です").with_violations(violations)),
            )
               .into_response()
         }
         BoardError::NotFound { kind, id } => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
               &format!("{kind}-not-found"),
               kind.not_found_title(),
               404,
               format!("{}が見つかりません (ID: {id})", kind.label()),
            )),
         )
            .into_response(),
         BoardError::Database(e) => {
            tracing::error!("データベースエラー: {}", e);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               Json(ErrorResponse::internal_error()),
            )
               .into_response()
         }
      }
   }
}
