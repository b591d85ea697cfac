//! Convenience result alias used across the application.

use crate::error::AppError;

/// Result alias with [`AppError`] as the error type.
pub type AppResult<T> = Result<T, AppError>;
