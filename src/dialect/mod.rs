//! Dialect capability and its PostgreSQL implementations
//!
//! The [`Dialect`] trait is the narrow contract an ORM binding consumes:
//! resolve an abstract type code to a physical column type, and pick the
//! descriptor used to bind values of a type. Implementations compose rather
//! than inherit; [`PostgresDialect`] wraps [`PostgisDialect`] and overrides
//! two of its answers.

mod postgis;
mod postgres;

pub use postgis::PostgisDialect;
pub use postgres::PostgresDialect;

use crate::descriptor::SqlTypeDescriptor;
use crate::error::{DialectError, Result};
use crate::type_code::SqlTypeCode;

/// Column type resolution and descriptor selection for one database.
///
/// All methods take `&self`: a dialect's configuration is fixed at
/// construction, so implementations are safe to share across threads.
pub trait Dialect: Send + Sync {
    /// Get the dialect identifier (e.g. "postgres").
    fn name(&self) -> &str;

    /// Resolve the physical column type for an abstract type code.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnmappedType`] if the dialect has no
    /// registration for `code`.
    fn column_type(&self, code: SqlTypeCode) -> Result<&str>;

    /// Choose the descriptor used to bind values of a type.
    ///
    /// Pure function of the input: the same descriptor always remaps to
    /// the same result, with no side effects.
    fn remap_sql_type_descriptor(&self, descriptor: SqlTypeDescriptor) -> SqlTypeDescriptor;

    /// Resolve the physical column type for a type code given by name.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnknownTypeCode`] if `name` is not a known
    /// type code, or [`DialectError::UnmappedType`] if the code has no
    /// registration.
    fn column_type_by_name(&self, name: &str) -> Result<&str> {
        let code = SqlTypeCode::parse(name)
            .ok_or_else(|| DialectError::UnknownTypeCode(name.to_string()))?;
        self.column_type(code)
    }
}
