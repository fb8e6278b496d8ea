// ABOUTME: Store error taxonomy shared by every persistence consumer
// ABOUTME: Separates pool connectivity failures from rejected operations

use thiserror::Error;

/// Store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// A pool could not produce a usable connection.
    #[error("Connection error: {0}")]
    Connectivity(#[source] sqlx::Error),
    /// The store rejected a read or write.
    #[error("Persistence error: {0}")]
    Persistence(#[source] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            e @ (sqlx::Error::Configuration(_)
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed) => StoreError::Connectivity(e),
            e => StoreError::Persistence(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_failures_classify_as_connectivity() {
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolClosed),
            StoreError::Connectivity(_)
        ));
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolTimedOut),
            StoreError::Connectivity(_)
        ));
    }

    #[test]
    fn query_failures_classify_as_persistence() {
        assert!(matches!(
            StoreError::from(sqlx::Error::RowNotFound),
            StoreError::Persistence(_)
        ));
    }
}
