use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Pagination page validation error")]
    PaginationError,

    #[error("Invalid value `{value}` for filter `{field}`")]
    InvalidFilter { field: String, value: String },

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("{0}")]
    MalformedSort(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

pub type AppResult<T> = Result<T, AppError>;
