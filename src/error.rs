//! Error types for store operations

use thiserror::Error;

/// Errors that can occur while building or running company/job statements
#[derive(Debug, Error)]
pub enum JoblyError {
    /// An update carried no fields
    #[error("No data")]
    EmptyUpdate,

    #[error("Invalid range: minimum {min} cannot be greater than maximum {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("Duplicate {0}")]
    Duplicate(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    #[error("Storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl JoblyError {
    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn storage(cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Storage(cause.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::UniqueViolation(_))
    }

    /// HTTP status the web layer should answer with for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::EmptyUpdate
            | Self::InvalidRange { .. }
            | Self::Duplicate(_)
            | Self::Validation(_) => 400,
            Self::UniqueViolation(_)
            | Self::ForeignKeyViolation(_)
            | Self::Storage(_)
            | Self::Connection(_)
            | Self::Json(_) => 500,
        }
    }
}

impl From<sqlx::Error> for JoblyError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.code().as_deref() {
                Some("23505") => {
                    return Self::UniqueViolation(format!("{}: {}", constraint, db_err.message()));
                }
                Some("23503") => {
                    return Self::ForeignKeyViolation(format!(
                        "{}: {}",
                        constraint,
                        db_err.message()
                    ));
                }
                _ => {}
            }
        }
        Self::Storage(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, JoblyError>;
