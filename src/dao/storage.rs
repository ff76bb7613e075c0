//! Storage error types shared by every repository.

use sea_orm::{DbErr, RuntimeErr, SqlErr};
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by repositories regardless of the underlying database backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The database cannot be reached.
    #[error("storage unavailable: {message}")]
    Unavailable {
        /// Human readable context for the connectivity failure.
        message: String,
        /// Underlying driver error.
        #[source]
        source: DbErr,
    },
    /// A uniqueness constraint rejected the write.
    #[error("duplicate {what}")]
    Duplicate {
        /// Description of the value that already exists.
        what: String,
        /// Underlying driver error.
        #[source]
        source: DbErr,
    },
    /// Any other query failure.
    #[error("{operation} failed")]
    Query {
        /// Name of the repository operation that failed.
        operation: &'static str,
        /// Underlying driver error.
        #[source]
        source: DbErr,
    },
}

impl StorageError {
    /// Classify a driver error raised while executing `operation`.
    ///
    /// Connection losses map to [`StorageError::Unavailable`] and unique
    /// constraint violations to [`StorageError::Duplicate`] so upper layers
    /// can translate them without inspecting backend-specific codes.
    pub fn from_db(operation: &'static str, source: DbErr) -> Self {
        if is_connectivity_error(&source) {
            return StorageError::Unavailable {
                message: format!("{operation}: connection lost"),
                source,
            };
        }

        if matches!(source.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
            return StorageError::Duplicate {
                what: operation.to_owned(),
                source,
            };
        }

        StorageError::Query { operation, source }
    }

    /// Like [`StorageError::from_db`] but naming the duplicated value explicitly.
    pub fn from_db_with_duplicate(
        operation: &'static str,
        duplicate_what: impl Into<String>,
        source: DbErr,
    ) -> Self {
        match Self::from_db(operation, source) {
            StorageError::Duplicate { source, .. } => StorageError::Duplicate {
                what: duplicate_what.into(),
                source,
            },
            other => other,
        }
    }
}

fn is_connectivity_error(err: &DbErr) -> bool {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => true,
        DbErr::Exec(RuntimeErr::Internal(message)) | DbErr::Query(RuntimeErr::Internal(message)) => {
            message.contains("connection")
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_errors_classify_as_unavailable() {
        let err = StorageError::from_db("load party", DbErr::Conn(RuntimeErr::Internal("refused".into())));
        assert!(matches!(err, StorageError::Unavailable { .. }));
    }

    #[test]
    fn other_errors_classify_as_query() {
        let err = StorageError::from_db("load party", DbErr::Custom("boom".into()));
        match err {
            StorageError::Query { operation, .. } => assert_eq!(operation, "load party"),
            other => panic!("unexpected classification: {other:?}"),
        }
    }
}
