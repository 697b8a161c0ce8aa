//! SQL type descriptors
//!
//! A descriptor pairs an abstract [`SqlTypeCode`] with the strategy used to
//! move values of that type across the driver boundary. Dialects may remap
//! the descriptor chosen for a column; see
//! [`Dialect::remap_sql_type_descriptor`](crate::Dialect::remap_sql_type_descriptor).

use crate::type_code::SqlTypeCode;

/// How a value crosses the driver boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BindMode {
    /// Bound inline as bytes or text in the statement parameters
    Inline,

    /// Bound as a chunked stream, for values too large to buffer
    Stream,

    /// Bound as a server-side large-object handle
    Locator,
}

/// Descriptor for binding and reading values of one abstract SQL type.
///
/// Descriptors are plain `Copy` values; the canonical instances are the
/// module-level constants ([`BINARY`], [`BLOB`], ...). Remapping a column's
/// descriptor means substituting one canonical instance for another.
///
/// # Examples
///
/// ```
/// use pg_dialect::descriptor::{self, BindMode};
/// use pg_dialect::SqlTypeCode;
///
/// assert_eq!(descriptor::BINARY.type_code(), SqlTypeCode::Varbinary);
/// assert_eq!(descriptor::BINARY.bind_mode(), BindMode::Inline);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SqlTypeDescriptor {
    code: SqlTypeCode,
    bind_mode: BindMode,
}

impl SqlTypeDescriptor {
    /// Creates a descriptor for the given type code and bind mode.
    #[inline]
    #[must_use]
    pub const fn new(code: SqlTypeCode, bind_mode: BindMode) -> Self {
        Self { code, bind_mode }
    }

    /// The abstract type code this descriptor handles.
    #[inline]
    #[must_use]
    pub const fn type_code(&self) -> SqlTypeCode {
        self.code
    }

    /// The strategy used to bind values of this type.
    #[inline]
    #[must_use]
    pub const fn bind_mode(&self) -> BindMode {
        self.bind_mode
    }
}

impl core::fmt::Display for SqlTypeDescriptor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// Canonical descriptor for inline binary binding (byte-array semantics).
///
/// Binds the full value as bytes in the statement parameters. This is the
/// descriptor BLOB columns are remapped to on PostgreSQL, where `bytea`
/// values are ordinary inline parameters rather than large-object handles.
pub const BINARY: SqlTypeDescriptor = SqlTypeDescriptor::new(SqlTypeCode::Varbinary, BindMode::Inline);

/// Canonical descriptor for BLOB columns using server-side large objects.
pub const BLOB: SqlTypeDescriptor = SqlTypeDescriptor::new(SqlTypeCode::Blob, BindMode::Locator);

/// Canonical descriptor for BLOB columns bound as chunked streams.
pub const BLOB_STREAM: SqlTypeDescriptor = SqlTypeDescriptor::new(SqlTypeCode::Blob, BindMode::Stream);

/// Canonical descriptor for CLOB columns using server-side large objects.
pub const CLOB: SqlTypeDescriptor = SqlTypeDescriptor::new(SqlTypeCode::Clob, BindMode::Locator);

/// Canonical descriptor for inline character binding.
pub const VARCHAR: SqlTypeDescriptor = SqlTypeDescriptor::new(SqlTypeCode::Varchar, BindMode::Inline);

/// Canonical descriptor for inline structured-object binding.
pub const OBJECT: SqlTypeDescriptor = SqlTypeDescriptor::new(SqlTypeCode::Object, BindMode::Inline);
