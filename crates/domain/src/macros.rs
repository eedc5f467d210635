/// ストレージ採番の数値 ID 型を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`i64` をラップ）
/// - `derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
///   Display)`
/// - `from_i64()`: 既存の数値から復元
/// - `as_i64()`: 内部の数値を取得
///
/// ID はストレージ（`BIGSERIAL`）が採番するため、`new()` は生成しない。
/// 未採番の状態はドラフト型（例: `NewMessage`）で表現する。
///
/// # 使用例
///
/// ```rust
/// use fusen_domain::message::MessageId;
///
/// let id = MessageId::from_i64(42);
/// assert_eq!(id.as_i64(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
macro_rules! define_entity_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
            derive_more::Display,
        )]
        #[display("{_0}")]
        $vis struct $Name(i64);

        impl $Name {
            /// 既存の数値から ID を復元する
            pub fn from_i64(value: i64) -> Self {
                Self(value)
            }

            /// 内部の数値を取得する
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }
    };
}

/// バリデーション付き String Newtype を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`String` をラップ）
/// - `new()`: trim + 必須チェック + 文字数範囲チェック
/// - `as_str()`: 文字列参照
/// - `into_string()`: 所有権を持つ文字列に変換
///
/// # 検証順序
///
/// trim 後に空であれば `required` 違反のみを返し、文字数チェックは行わない。
/// 空入力に対して required と length の違反が重複して報告されることはない。
///
/// # 引数
///
/// - `$field`: 違反に記録するフィールド名（例: `"content"`）
/// - `$label`: エラーメッセージに使うラベル（例: `"本文"`）
/// - `$min_length` / `$max_length`: 許容する文字数範囲（`chars().count()`
///   でカウント）
///
/// # 使用例
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use fusen_domain::message::MessageContent;
///
/// let content = MessageContent::new("こんにちは")?;
/// assert_eq!(content.as_str(), "こんにちは");
///
/// // 空入力は required 違反 1 件のみ
/// let violation = MessageContent::new("   ").unwrap_err();
/// assert_eq!(violation.code, "required");
/// # Ok(())
/// # }
/// ```
macro_rules! define_validated_string {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            field: $field:expr,
            label: $label:expr,
            min_length: $min_length:expr,
            max_length: $max_length:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq,
            serde::Serialize, serde::Deserialize,
        )]
        $vis struct $Name(String);

        impl $Name {
            pub fn new(value: impl Into<String>) -> Result<Self, $crate::Violation> {
                let value = value.into().trim().to_string();

                if value.is_empty() {
                    return Err($crate::Violation::required($field, $label));
                }

                let count = value.chars().count();
                if !($min_length..=$max_length).contains(&count) {
                    return Err($crate::Violation::length_out_of_range(
                        $field,
                        $label,
                        $min_length,
                        $max_length,
                    ));
                }

                Ok(Self(value))
            }

            /// 文字列参照を取得する
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// 所有権を持つ文字列に変換する
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
