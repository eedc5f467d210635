//! ユースケース層の共通ヘルパー
//!
//! リポジトリ呼び出し結果の変換など、
//! 複数のユースケースで繰り返されるパターンを共通化する。

use fusen_infra::InfraError;

use crate::error::{BoardError, EntityKind};

/// リポジトリの `Result<Option<T>, InfraError>` を `Result<T, BoardError>` に変換する
///
/// `find_by_id` 等の `Option` を返すリポジトリメソッドの結果を、
/// `BoardError::NotFound` または `BoardError::Database` に変換する。
///
/// ```ignore
/// // Before
/// let message = self.message_repository.find_by_id(id).await
///     .map_err(BoardError::from)?
///     .ok_or(BoardError::NotFound { kind: EntityKind::Message, id: id.as_i64() })?;
///
/// // After
/// let message = self.message_repository.find_by_id(id).await
///     .or_not_found(EntityKind::Message, id.as_i64())?;
/// ```
pub(crate) trait FindResultExt<T> {
    /// `None` の場合は `BoardError::NotFound`、`InfraError` の場合は `BoardError::Database` を返す
    fn or_not_found(self, kind: EntityKind, id: i64) -> Result<T, BoardError>;
}

impl<T> FindResultExt<T> for Result<Option<T>, InfraError> {
    fn or_not_found(self, kind: EntityKind, id: i64) -> Result<T, BoardError> {
        self.map_err(BoardError::from)?
            .ok_or(BoardError::NotFound { kind, id })
    }
}

/// 影響行数から更新・削除の成否を判定する
///
/// 影響行数が 0 の場合、対象の行が存在しなかったとみなして
/// `BoardError::NotFound` を返す。
pub(crate) fn ensure_affected(affected: u64, kind: EntityKind, id: i64) -> Result<(), BoardError> {
    if affected == 0 {
        return Err(BoardError::NotFound { kind, id });
    }
    Ok(())
}
