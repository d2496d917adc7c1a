//! Result type alias for configuration generation

use crate::error::LintgenError;

/// Standard Result type for configuration generation
pub type Result<T> = std::result::Result<T, LintgenError>;
