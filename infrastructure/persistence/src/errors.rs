use business::domain::errors::RepositoryError;

/// Maps a driver error onto the domain's repository error.
///
/// A foreign key violation on insert means the referenced row is gone, so it
/// surfaces as `NotFound`; deletes that hit a restricting reference handle
/// that case themselves.
pub(crate) fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    match &error {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Conflict,
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => RepositoryError::NotFound,
        _ => {
            tracing::error!(target: "persistence", error = %error, "database query failed");
            RepositoryError::DatabaseError
        }
    }
}

/// Like `map_sqlx_error`, for deletes guarded by `ON DELETE RESTRICT`.
pub(crate) fn map_delete_error(error: sqlx::Error) -> RepositoryError {
    match &error {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => RepositoryError::Referenced,
        _ => map_sqlx_error(error),
    }
}
