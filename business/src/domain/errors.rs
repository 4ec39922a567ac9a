/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// A concurrent write changed the row this write was based on.
    #[error("repository.conflict")]
    Conflict,
    /// The row is still referenced by another table and cannot be deleted.
    #[error("repository.referenced")]
    Referenced,
    #[error("repository.database_error")]
    DatabaseError,
}
