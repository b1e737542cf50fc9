/// Name of the unique constraint on `links.slug`, see `migrations/`.
pub const SLUG_UNIQUE_CONSTRAINT: &str = "links_slug_key";

/// Returns true if `e` is a unique violation on the slug column.
pub fn is_unique_violation_on_slug(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SLUG_UNIQUE_CONSTRAINT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_violations() {
        assert!(!is_unique_violation_on_slug(&sqlx::Error::PoolTimedOut));
        assert!(!is_unique_violation_on_slug(&sqlx::Error::RowNotFound));
    }
}
