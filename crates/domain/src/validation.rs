//! # 入力バリデーション違反
//!
//! リクエスト入力の検証失敗をフィールド単位で表現する型を定義する。
//!
//! ## 設計方針
//!
//! - **1 パス検証**: 検証は最初の違反で打ち切らず、全フィールドの違反を
//!   収集してまとめて返す。呼び出し元は 1 往復で完全な診断を得られる
//! - **順序保証**: 違反は入力のフィールド宣言順に並ぶ
//! - **データとしての違反**: 違反はトランスポート層まで運ばれてレスポンスに
//!   埋め込まれるデータであり、`Serialize` を実装する

use serde::Serialize;
use thiserror::Error;

/// フィールド単位のバリデーション違反
///
/// `field` は機械可読なフィールド名、`code` は違反種別、`message` は
/// 人間可読な説明。レスポンスの問題詳細（RFC 9457）にそのまま埋め込まれる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {message}")]
pub struct Violation {
    pub field:   String,
    pub code:    String,
    pub message: String,
}

impl Violation {
    /// 必須フィールドが未入力の違反を作成する
    pub fn required(field: impl Into<String>, label: &str) -> Self {
        Self {
            field:   field.into(),
            code:    "required".to_string(),
            message: format!("{label}は必須です"),
        }
    }

    /// 文字数が許容範囲外の違反を作成する
    pub fn length_out_of_range(
        field: impl Into<String>,
        label: &str,
        min_length: usize,
        max_length: usize,
    ) -> Self {
        Self {
            field:   field.into(),
            code:    "length_out_of_range".to_string(),
            message: format!(
                "{label}は {min_length} 文字以上 {max_length} 文字以内である必要があります"
            ),
        }
    }
}

/// バリデーション違反の順序付きコレクション
///
/// # 不変条件
///
/// - 空にならない: 違反がなければ検証はエンティティ／ドラフトを返すため、
///   この型が生成されるのは少なくとも 1 件の違反があるときのみ
/// - 入力のフィールド宣言順を保持する
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self(violations)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Violation] {
        &self.0
    }
}

impl std::fmt::Display for Violations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{joined}")
    }
}

impl std::error::Error for Violations {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_required違反はフィールド名とコードを持つ() {
        let violation = Violation::required("content", "本文");

        assert_eq!(violation.field, "content");
        assert_eq!(violation.code, "required");
        assert_eq!(violation.message, "本文は必須です");
    }

    #[test]
    fn test_length違反は許容範囲をメッセージに含む() {
        let violation = Violation::length_out_of_range("content", "本文", 2, 2048);

        assert_eq!(violation.code, "length_out_of_range");
        assert_eq!(
            violation.message,
            "本文は 2 文字以上 2048 文字以内である必要があります"
        );
    }

    #[test]
    fn test_違反はserdeで配列に直列化される() {
        let violations = Violations::new(vec![
            Violation::required("topic_id", "トピック ID"),
            Violation::required("content", "本文"),
        ]);

        let json = serde_json::to_value(&violations).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {
                    "field": "topic_id",
                    "code": "required",
                    "message": "トピック IDは必須です"
                },
                {
                    "field": "content",
                    "code": "required",
                    "message": "本文は必須です"
                }
            ])
        );
    }

    #[test]
    fn test_違反コレクションは挿入順を保持する() {
        let violations = Violations::new(vec![
            Violation::required("topic_id", "トピック ID"),
            Violation::length_out_of_range("content", "本文", 2, 2048),
        ]);

        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["topic_id", "content"]);
    }

    #[test]
    fn test_displayは全違反をセミコロンで連結する() {
        let violations = Violations::new(vec![
            Violation::required("topic_id", "トピック ID"),
            Violation::required("content", "本文"),
        ]);

        assert_eq!(
            violations.to_string(),
            "topic_id: トピック IDは必須です; content: 本文は必須です"
        );
    }
}
