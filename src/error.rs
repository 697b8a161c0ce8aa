use thiserror::Error;

use crate::type_code::SqlTypeCode;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DialectError {
    /// No physical column type registered for a type code
    #[error("no column type registered for '{0}'")]
    UnmappedType(SqlTypeCode),

    /// Error parsing a type code string
    #[error("unknown sql type code '{0}'")]
    UnknownTypeCode(String),
}

/// Result type for dialect operations
pub type Result<T> = std::result::Result<T, DialectError>;
