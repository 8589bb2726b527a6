//! Convenience result type alias for Metro Claim.

use crate::error::AppError;

/// A specialized `Result` type for Metro Claim operations.
pub type AppResult<T> = Result<T, AppError>;
