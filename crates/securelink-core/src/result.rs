//! Convenience result type alias for SecureLink.

use crate::error::AppError;

/// A specialized `Result` type for SecureLink operations.
pub type AppResult<T> = Result<T, AppError>;
