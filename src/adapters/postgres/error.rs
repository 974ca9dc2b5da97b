//! SQLSTATE classification shared by the Postgres adapters.

use crate::domain::foundation::{DomainError, ErrorCode};

const FOREIGN_KEY_VIOLATION: &str = "23503";
const UNIQUE_VIOLATION: &str = "23505";

/// Wraps a write failure, surfacing constraint violations as their own codes.
pub(crate) fn write_error(operation: &str, err: sqlx::Error) -> DomainError {
    let constraint_code = err
        .as_database_error()
        .and_then(|db| db.code())
        .map(|code| code.into_owned());

    match constraint_code.as_deref() {
        Some(FOREIGN_KEY_VIOLATION) => DomainError::new(
            ErrorCode::ReferenceViolation,
            format!("Failed to {}: referenced row does not exist", operation),
        ),
        Some(UNIQUE_VIOLATION) => DomainError::new(
            ErrorCode::UniqueViolation,
            format!("Failed to {}: duplicate key", operation),
        ),
        _ => DomainError::database(operation, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_keep_operation_context() {
        let err = write_error("insert workout record", sqlx::Error::RowNotFound);

        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(err.message.starts_with("Failed to insert workout record: "));
    }
}
