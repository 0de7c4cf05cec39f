//! Application Errors
//!
//! One error type shared by the form core, settings and reward rules.

/// Common result type for UI-side operations
pub type AppResult<T> = Result<T, AppError>;

/// UI-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Shop or item lookup came back empty
    NotFound(String),
    /// A field failed a required/numeric check
    Validation(String),
    /// The external store rejected a write
    Persistence(String),
    /// Operation not allowed in the current state
    Conflict(String),
}

impl AppError {
    /// Message shown to the user, without the category prefix
    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound(msg)
            | AppError::Validation(msg)
            | AppError::Persistence(msg)
            | AppError::Conflict(msg) => msg,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Validation(msg) => write!(f, "Invalid input: {}", msg),
            AppError::Persistence(msg) => write!(f, "Save failed: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
