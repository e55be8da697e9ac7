//! Result type alias for Marklee operations.

use super::marklee_error::MarkleeError;

/// Type alias for Results using MarkleeError.
pub type MarkleeResult<T> = Result<T, MarkleeError>;
