use thiserror::Error;

/// SQLSTATE for `foreign_key_violation`
const FOREIGN_KEY_VIOLATION: &str = "23503";
/// SQLSTATE for `unique_violation`
const UNIQUE_VIOLATION: &str = "23505";

/// Failure of a single repository statement.
///
/// Constraint violations are lifted out of the driver error so callers can
/// match on the kind without knowing engine codes.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("foreign key violation ({})", constraint.as_deref().unwrap_or("unnamed"))]
    ForeignKeyViolation { constraint: Option<String> },

    #[error("unique violation ({})", constraint.as_deref().unwrap_or("unnamed"))]
    UniqueViolation { constraint: Option<String> },

    #[error(transparent)]
    Unexpected(sqlx::Error),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        let code = match &err {
            sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
            _ => None,
        };
        let constraint = match &err {
            sqlx::Error::Database(db_err) => db_err.constraint().map(str::to_string),
            _ => None,
        };

        match code.as_deref() {
            Some(FOREIGN_KEY_VIOLATION) => RepositoryError::ForeignKeyViolation { constraint },
            Some(UNIQUE_VIOLATION) => RepositoryError::UniqueViolation { constraint },
            _ => RepositoryError::Unexpected(err),
        }
    }
}
