use thiserror::Error;

/// Result type for message store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Error types for message store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store cannot be reached (connection refused, pool timeout, closed socket)
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The store was reached but rejected the operation
    #[error("Database error: {0}")]
    Database(String),

    /// A time window bound did not match `YYYY-MM-DDTHH:MM:SS`.
    /// Only produced under `RangeParsePolicy::Strict`.
    #[error("Malformed time range: start '{start}', end '{end}'")]
    MalformedTimeRange { start: String, end: String },

    /// Invalid connection string or configuration value
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl StoreError {
    /// True when the failure means the store could not be reached at all
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}

/// Convert tokio-postgres errors to store errors
impl From<tokio_postgres::Error> for StoreError {
    fn from(err: tokio_postgres::Error) -> Self {
        // A server-side error means the connection itself worked
        if let Some(db_error) = err.as_db_error() {
            return StoreError::Database(format!(
                "{}: {}",
                db_error.code().code(),
                db_error.message()
            ));
        }

        StoreError::Unavailable(err.to_string())
    }
}

/// Convert deadpool errors to store errors
impl From<deadpool_postgres::PoolError> for StoreError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

/// Convert deadpool build errors to store errors
impl From<deadpool_postgres::BuildError> for StoreError {
    fn from(err: deadpool_postgres::BuildError) -> Self {
        StoreError::Configuration(err.to_string())
    }
}
