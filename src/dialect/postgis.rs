//! PostGIS-aware base dialect.

use crate::descriptor::SqlTypeDescriptor;
use crate::error::Result;
use crate::registry::TypeRegistry;
use crate::type_code::SqlTypeCode;

use super::Dialect;

/// Base PostgreSQL dialect with PostGIS spatial types.
///
/// Installs the stock physical column types for PostgreSQL plus
/// `geometry`/`geography` for spatial columns. BLOB columns default to
/// `oid` (server-side large objects) and the generic object code is left
/// unregistered; [`PostgresDialect`](super::PostgresDialect) overrides
/// both.
///
/// The descriptor remap on this dialect is the identity function.
#[derive(Debug, Clone)]
pub struct PostgisDialect {
    registry: TypeRegistry,
}

impl PostgisDialect {
    /// Creates the base dialect with its default registrations.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = TypeRegistry::new();

        registry.register_column_type(SqlTypeCode::Boolean, "boolean");
        registry.register_column_type(SqlTypeCode::SmallInt, "smallint");
        registry.register_column_type(SqlTypeCode::Integer, "integer");
        registry.register_column_type(SqlTypeCode::BigInt, "bigint");
        registry.register_column_type(SqlTypeCode::Real, "real");
        registry.register_column_type(SqlTypeCode::Double, "double precision");
        registry.register_column_type(SqlTypeCode::Numeric, "numeric");
        registry.register_column_type(SqlTypeCode::Char, "char");
        registry.register_column_type(SqlTypeCode::Varchar, "varchar");
        registry.register_column_type(SqlTypeCode::Text, "text");
        registry.register_column_type(SqlTypeCode::Date, "date");
        registry.register_column_type(SqlTypeCode::Time, "time");
        registry.register_column_type(SqlTypeCode::Timestamp, "timestamp");
        registry.register_column_type(SqlTypeCode::TimestampTz, "timestamptz");
        registry.register_column_type(SqlTypeCode::Binary, "bytea");
        registry.register_column_type(SqlTypeCode::Varbinary, "bytea");
        registry.register_column_type(SqlTypeCode::Clob, "text");
        registry.register_column_type(SqlTypeCode::Uuid, "uuid");

        // Large objects live out-of-line by default; see PostgresDialect
        // for the bytea override.
        registry.register_column_type(SqlTypeCode::Blob, "oid");

        // PostGIS spatial columns
        registry.register_column_type(SqlTypeCode::Geometry, "geometry");
        registry.register_column_type(SqlTypeCode::Geography, "geography");

        Self { registry }
    }

    /// Mutable access to the registration table, for customizing dialects.
    ///
    /// Registrations are only meaningful during construction; once the
    /// dialect is handed to a consumer it is used read-only.
    pub fn registry_mut(&mut self) -> &mut TypeRegistry {
        &mut self.registry
    }
}

impl Default for PostgisDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for PostgisDialect {
    fn name(&self) -> &str {
        "postgis"
    }

    fn column_type(&self, code: SqlTypeCode) -> Result<&str> {
        self.registry.column_type(code)
    }

    fn remap_sql_type_descriptor(&self, descriptor: SqlTypeDescriptor) -> SqlTypeDescriptor {
        descriptor
    }
}
