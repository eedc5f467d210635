//! # インフラ層エラー定義
//!
//! データベースとの通信で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! [`InfraError`] はエラー種別（[`InfraErrorKind`]）と発生時の
//! [`SpanTrace`] を保持する。`SpanTrace` は tracing のスパン情報を
//! キャプチャし、非同期コードでもエラーの発生経路を追跡できるようにする。

use std::fmt;

use tracing_error::SpanTrace;

/// インフラ層のエラー
///
/// エラー種別と発生時のスパントレースを保持する。
/// スパントレースは生成時に自動的にキャプチャされる。
#[derive(derive_more::Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層のエラー種別
#[derive(Debug, thiserror::Error)]
pub enum InfraErrorKind {
    /// データベース操作のエラー
    #[error("データベースエラー: {0}")]
    Database(#[source] sqlx::Error),

    /// 予期しないエラー
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// スパントレースを取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// 予期しないエラーを生成する
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::Unexpected(message.into()),
            span_trace: SpanTrace::capture(),
        }
    }
}

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}\n\nSpan trace:\n{}", self.kind, self.span_trace)
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

impl From<sqlx::Error> for InfraError {
    fn from(e: sqlx::Error) -> Self {
        Self {
            kind:       InfraErrorKind::Database(e),
            span_trace: SpanTrace::capture(),
        }
    }
}
