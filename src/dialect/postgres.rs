//! Customized PostgreSQL dialect.

use crate::descriptor::{self, SqlTypeDescriptor};
use crate::dialect_trace_remap;
use crate::error::Result;
use crate::type_code::SqlTypeCode;

use super::{Dialect, PostgisDialect};

/// PostgreSQL dialect with JSONB objects and inline BLOB binding.
///
/// Wraps [`PostgisDialect`] and changes two of its answers:
///
/// - structured application objects are stored as `jsonb` columns
/// - BLOB columns are stored as `bytea` instead of `oid`, and their
///   descriptor is remapped to [`descriptor::BINARY`] so values are bound
///   inline as byte arrays rather than through large-object handles
///
/// Everything else delegates to the base dialect unchanged.
///
/// # Examples
///
/// ```
/// use pg_dialect::{Dialect, PostgresDialect, SqlTypeCode};
///
/// let dialect = PostgresDialect::new();
/// assert_eq!(dialect.column_type(SqlTypeCode::Object).unwrap(), "jsonb");
/// assert_eq!(dialect.column_type(SqlTypeCode::Blob).unwrap(), "bytea");
/// ```
#[derive(Debug, Clone)]
pub struct PostgresDialect {
    base: PostgisDialect,
}

impl PostgresDialect {
    /// Creates the dialect and issues its two column-type overrides.
    #[must_use]
    pub fn new() -> Self {
        let mut base = PostgisDialect::new();
        base.registry_mut()
            .register_column_type(SqlTypeCode::Object, "jsonb");
        base.registry_mut()
            .register_column_type(SqlTypeCode::Blob, "bytea");
        Self { base }
    }
}

impl Default for PostgresDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &str {
        "postgres"
    }

    fn column_type(&self, code: SqlTypeCode) -> Result<&str> {
        self.base.column_type(code)
    }

    fn remap_sql_type_descriptor(&self, descriptor: SqlTypeDescriptor) -> SqlTypeDescriptor {
        if descriptor.type_code() == SqlTypeCode::Blob {
            dialect_trace_remap!(descriptor, descriptor::BINARY);
            return descriptor::BINARY;
        }
        self.base.remap_sql_type_descriptor(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::BindMode;

    #[test]
    fn test_object_maps_to_jsonb() {
        let dialect = PostgresDialect::new();
        assert_eq!(dialect.column_type(SqlTypeCode::Object).unwrap(), "jsonb");
    }

    #[test]
    fn test_blob_maps_to_bytea() {
        let dialect = PostgresDialect::new();
        assert_eq!(dialect.column_type(SqlTypeCode::Blob).unwrap(), "bytea");
    }

    #[test]
    fn test_base_registrations_untouched() {
        let dialect = PostgresDialect::new();
        assert_eq!(dialect.column_type(SqlTypeCode::Text).unwrap(), "text");
        assert_eq!(
            dialect.column_type(SqlTypeCode::Geometry).unwrap(),
            "geometry"
        );
    }

    #[test]
    fn test_blob_descriptor_remaps_to_binary() {
        let dialect = PostgresDialect::new();

        // Every BLOB descriptor remaps to the canonical binary descriptor,
        // whatever its bind mode.
        for mode in [BindMode::Inline, BindMode::Stream, BindMode::Locator] {
            let input = SqlTypeDescriptor::new(SqlTypeCode::Blob, mode);
            assert_eq!(dialect.remap_sql_type_descriptor(input), descriptor::BINARY);
        }
    }

    #[test]
    fn test_non_blob_descriptor_delegates() {
        let dialect = PostgresDialect::new();
        let base = PostgisDialect::new();

        for input in [
            descriptor::VARCHAR,
            descriptor::CLOB,
            descriptor::OBJECT,
            SqlTypeDescriptor::new(SqlTypeCode::Varbinary, BindMode::Stream),
        ] {
            assert_eq!(
                dialect.remap_sql_type_descriptor(input),
                base.remap_sql_type_descriptor(input)
            );
        }
    }

    #[test]
    fn test_remap_is_idempotent() {
        let dialect = PostgresDialect::new();
        let input = SqlTypeDescriptor::new(SqlTypeCode::Blob, BindMode::Locator);
        let first = dialect.remap_sql_type_descriptor(input);
        let second = dialect.remap_sql_type_descriptor(input);
        assert_eq!(first, second);
    }
}
