//! Column type registration table
//!
//! Maps abstract [`SqlTypeCode`]s to the physical column type a dialect
//! emits for them. The table is populated while a dialect is constructed
//! and read-only afterward.

use std::collections::HashMap;

use crate::dialect_trace_register;
use crate::error::{DialectError, Result};
use crate::type_code::SqlTypeCode;

/// Registration table from type code to physical column type.
///
/// Later registrations for the same code replace earlier ones, which is
/// what lets a customized dialect override the defaults its base dialect
/// installed.
///
/// # Examples
///
/// ```
/// use pg_dialect::{SqlTypeCode, TypeRegistry};
///
/// let mut registry = TypeRegistry::new();
/// registry.register_column_type(SqlTypeCode::Blob, "oid");
/// registry.register_column_type(SqlTypeCode::Blob, "bytea");
/// assert_eq!(registry.column_type(SqlTypeCode::Blob).unwrap(), "bytea");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<SqlTypeCode, String>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the physical column type for a type code.
    ///
    /// Replaces any existing registration for the same code.
    pub fn register_column_type(&mut self, code: SqlTypeCode, name: impl Into<String>) {
        let name = name.into();
        dialect_trace_register!(code, name);
        self.types.insert(code, name);
    }

    /// Look up the physical column type for a type code.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnmappedType`] if no column type has been
    /// registered for `code`.
    pub fn column_type(&self, code: SqlTypeCode) -> Result<&str> {
        self.types
            .get(&code)
            .map(String::as_str)
            .ok_or(DialectError::UnmappedType(code))
    }

    /// Returns `true` if a column type has been registered for `code`.
    #[must_use]
    pub fn contains(&self, code: SqlTypeCode) -> bool {
        self.types.contains_key(&code)
    }

    /// Number of registered type codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no type codes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = TypeRegistry::new();
        registry.register_column_type(SqlTypeCode::Integer, "integer");
        registry.register_column_type(SqlTypeCode::Object, "jsonb");

        assert_eq!(
            registry.column_type(SqlTypeCode::Integer).unwrap(),
            "integer"
        );
        assert_eq!(registry.column_type(SqlTypeCode::Object).unwrap(), "jsonb");
        assert!(registry.contains(SqlTypeCode::Integer));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_later_registration_wins() {
        let mut registry = TypeRegistry::new();
        registry.register_column_type(SqlTypeCode::Blob, "oid");
        registry.register_column_type(SqlTypeCode::Blob, "bytea");

        assert_eq!(registry.column_type(SqlTypeCode::Blob).unwrap(), "bytea");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregistered_code_is_error() {
        let registry = TypeRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(
            registry.column_type(SqlTypeCode::Uuid),
            Err(DialectError::UnmappedType(SqlTypeCode::Uuid))
        );
    }
}
