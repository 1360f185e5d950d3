//! Helpers for classifying database constraint violations.

/// Returns `true` if `e` is a unique violation on the named constraint.
pub fn is_unique_violation_on(e: &sqlx::Error, constraint: &str) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation() && db_err.constraint() == Some(constraint)
}

/// Returns `true` if `e` is a check-constraint violation on the named constraint.
pub fn is_check_violation_on(e: &sqlx::Error, constraint: &str) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_check_violation() && db_err.constraint() == Some(constraint)
}

/// Returns `true` if `e` is a foreign-key violation.
pub fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_foreign_key_violation())
}
