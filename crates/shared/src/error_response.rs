//! # エラーレスポンス（RFC 9457 Problem Details）
//!
//! サービス共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は各サービスの責務（shared に axum 依存を入れない）
//! - よく使うエラー種別は便利コンストラクタで提供し、URI のハードコードを排除
//! - バリデーションエラーは拡張メンバー `violations` で違反の詳細を返す
//!   （RFC 9457 の Extension Members）

use serde::{Deserialize, Serialize};

/// error_type URI のベースパス
const ERROR_TYPE_BASE: &str = "https://fusen.example.com/errors";

/// エラーレスポンス（RFC 9457 Problem Details）
///
/// すべてのエラーで統一されたレスポンス形式。
/// `type` フィールドは URI で問題の種類を識別する。
/// `violations` はバリデーションエラー時のみ出力される拡張メンバー。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   #[serde(rename = "type")]
   pub error_type: String,
   pub title:      String,
   pub status:     u16,
   pub detail:     String,
   #[serde(skip_serializing_if = "Vec::is_empty", default)]
   pub violations: Vec<FieldViolation>,
}

/// フィールド単位のバリデーション違反
///
/// `field` は違反したフィールド名、`code` は機械可読な違反種別、
/// `message` は人間向けの説明を示す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
   pub field:   String,
   pub code:    String,
   pub message: String,
}

impl ErrorResponse {
   /// 汎用コンストラクタ
   ///
   /// サービス固有のエラー種別を作成する場合に使用する。
   /// `error_type_suffix` はベース URI に付加される（例: `"message-not-found"`）。
   pub fn new(
      error_type_suffix: &str,
      title: impl Into<String>,
      status: u16,
      detail: impl Into<String>,
   ) -> Self {
      Self {
         error_type: format!("{ERROR_TYPE_BASE}/{error_type_suffix}"),
         title: title.into(),
         status,
         detail: detail.into(),
         violations: Vec::new(),
      }
   }

   /// バリデーション違反の詳細を付加する
   pub fn with_violations(mut self, violations: Vec<FieldViolation>) -> Self {
      self.violations = violations;
      self
   }

   /// 400 Validation Error
   pub fn validation_error(detail: impl Into<String>) -> Self {
      Self::new("validation-error", "Validation Error", 400, detail)
   }

   /// 500 Internal Server Error
   ///
   /// detail は固定値（内部情報を漏らさないため）。
   pub fn internal_error() -> Self {
      Self::new(
         "internal-error",
         "Internal Server Error",
         500,
         "内部エラーが発生しました",
      )
   }
}
