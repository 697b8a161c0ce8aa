//! # pg-dialect
//!
//! PostgreSQL dialect column-type configuration for ORM bindings.
//!
//! The crate answers two questions a schema/binding layer asks its dialect:
//!
//! - **What physical column type backs this abstract SQL type code?**
//!   [`PostgresDialect`] maps structured application objects to `jsonb`
//!   and BLOBs to `bytea`.
//! - **What descriptor binds values of this type?** BLOB descriptors are
//!   remapped to the canonical inline binary descriptor
//!   ([`descriptor::BINARY`]), so `bytea` values travel as ordinary byte
//!   parameters instead of large-object handles.
//!
//! ## Quick Start
//!
//! ```rust
//! use pg_dialect::{Dialect, PostgresDialect, SqlTypeCode, descriptor};
//!
//! let dialect = PostgresDialect::new();
//!
//! assert_eq!(dialect.column_type(SqlTypeCode::Object).unwrap(), "jsonb");
//! assert_eq!(dialect.column_type(SqlTypeCode::Blob).unwrap(), "bytea");
//!
//! let remapped = dialect.remap_sql_type_descriptor(descriptor::BLOB);
//! assert_eq!(remapped, descriptor::BINARY);
//! ```
//!
//! ## Features
//!
//! - `serde` - Enable serde serialization/deserialization for the type enums
//! - `tracing` - Emit debug events for registration and descriptor remapping

pub mod descriptor;
mod dialect;
mod error;
mod registry;
mod tracing;
mod type_code;

pub use dialect::{Dialect, PostgisDialect, PostgresDialect};
pub use error::{DialectError, Result};
pub use registry::TypeRegistry;
pub use type_code::{SqlTypeCode, TypeCodeParseError};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::descriptor::{BindMode, SqlTypeDescriptor};
    pub use crate::{Dialect, PostgisDialect, PostgresDialect, SqlTypeCode, TypeRegistry};
}
