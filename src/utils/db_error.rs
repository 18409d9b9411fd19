//! Classification of `sqlx` errors into repository error kinds.

use crate::domain::repositories::RepositoryError;

impl From<sqlx::Error> for RepositoryError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db_err) = e.as_database_error()
            && db_err.is_unique_violation()
        {
            return RepositoryError::UniqueViolation {
                constraint: db_err.constraint().map(str::to_string),
            };
        }

        match e {
            sqlx::Error::RowNotFound => RepositoryError::NotFound,
            other => RepositoryError::Database(other.to_string()),
        }
    }
}
