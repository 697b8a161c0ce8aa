//! Generic SQL type codes
//!
//! This module provides a single source of truth for the abstract type
//! identifiers the dialect layer keys its column-type registrations on.
//! The codes are database-independent; a [`Dialect`](crate::Dialect)
//! resolves each one to a concrete physical column type.

/// Generic SQL type code, independent of any concrete database.
///
/// Each variant identifies an abstract type category. Dialects map these
/// to physical column types (e.g. [`SqlTypeCode::Blob`] → `bytea` on
/// PostgreSQL) and to the descriptor used when binding values.
///
/// # Examples
///
/// ```
/// use pg_dialect::SqlTypeCode;
///
/// let code = SqlTypeCode::Blob;
/// assert_eq!(code.as_str(), "blob");
/// assert!(code.is_binary());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SqlTypeCode {
    /// Boolean truth value
    Boolean,

    /// 16-bit signed integer
    SmallInt,

    /// 32-bit signed integer
    Integer,

    /// 64-bit signed integer
    BigInt,

    /// Single precision floating-point number
    Real,

    /// Double precision floating-point number
    Double,

    /// Exact numeric with selectable precision
    Numeric,

    /// Fixed-length character string
    Char,

    /// Variable-length character string
    Varchar,

    /// Unbounded character data
    Text,

    /// Calendar date
    Date,

    /// Time of day
    Time,

    /// Date and time
    Timestamp,

    /// Date and time with time zone
    TimestampTz,

    /// Fixed-length binary data
    Binary,

    /// Variable-length binary data
    Varbinary,

    /// Binary large object
    Blob,

    /// Character large object
    Clob,

    /// Universally unique identifier
    Uuid,

    /// Driver-defined structured value (serialized application object)
    Object,

    /// Spatial geometry value
    Geometry,

    /// Spatial geography value
    Geography,
}

impl SqlTypeCode {
    /// Parse a type code from a string (case-insensitive)
    ///
    /// Supports common aliases:
    /// - `Integer`: `"integer"`, `"int"`, `"int4"`
    /// - `BigInt`: `"bigint"`, `"int8"`
    /// - `Double`: `"double"`, `"float8"`
    /// - `TimestampTz`: `"timestamptz"`, `"timestamp_tz"`
    ///
    /// # Examples
    ///
    /// ```
    /// use pg_dialect::SqlTypeCode;
    ///
    /// assert_eq!(SqlTypeCode::parse("blob"), Some(SqlTypeCode::Blob));
    /// assert_eq!(SqlTypeCode::parse("INT"), Some(SqlTypeCode::Integer));
    /// assert_eq!(SqlTypeCode::parse("unknown"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("boolean") || s.eq_ignore_ascii_case("bool") {
            Some(Self::Boolean)
        } else if s.eq_ignore_ascii_case("smallint") || s.eq_ignore_ascii_case("int2") {
            Some(Self::SmallInt)
        } else if s.eq_ignore_ascii_case("integer")
            || s.eq_ignore_ascii_case("int")
            || s.eq_ignore_ascii_case("int4")
        {
            Some(Self::Integer)
        } else if s.eq_ignore_ascii_case("bigint") || s.eq_ignore_ascii_case("int8") {
            Some(Self::BigInt)
        } else if s.eq_ignore_ascii_case("real") || s.eq_ignore_ascii_case("float4") {
            Some(Self::Real)
        } else if s.eq_ignore_ascii_case("double") || s.eq_ignore_ascii_case("float8") {
            Some(Self::Double)
        } else if s.eq_ignore_ascii_case("numeric") || s.eq_ignore_ascii_case("decimal") {
            Some(Self::Numeric)
        } else if s.eq_ignore_ascii_case("char") || s.eq_ignore_ascii_case("character") {
            Some(Self::Char)
        } else if s.eq_ignore_ascii_case("varchar") {
            Some(Self::Varchar)
        } else if s.eq_ignore_ascii_case("text") {
            Some(Self::Text)
        } else if s.eq_ignore_ascii_case("date") {
            Some(Self::Date)
        } else if s.eq_ignore_ascii_case("time") {
            Some(Self::Time)
        } else if s.eq_ignore_ascii_case("timestamp") {
            Some(Self::Timestamp)
        } else if s.eq_ignore_ascii_case("timestamptz") || s.eq_ignore_ascii_case("timestamp_tz") {
            Some(Self::TimestampTz)
        } else if s.eq_ignore_ascii_case("binary") {
            Some(Self::Binary)
        } else if s.eq_ignore_ascii_case("varbinary") {
            Some(Self::Varbinary)
        } else if s.eq_ignore_ascii_case("blob") {
            Some(Self::Blob)
        } else if s.eq_ignore_ascii_case("clob") {
            Some(Self::Clob)
        } else if s.eq_ignore_ascii_case("uuid") {
            Some(Self::Uuid)
        } else if s.eq_ignore_ascii_case("object") {
            Some(Self::Object)
        } else if s.eq_ignore_ascii_case("geometry") {
            Some(Self::Geometry)
        } else if s.eq_ignore_ascii_case("geography") {
            Some(Self::Geography)
        } else {
            None
        }
    }

    /// Returns `true` for the binary family of type codes
    #[inline]
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        matches!(self, Self::Binary | Self::Varbinary | Self::Blob)
    }

    /// Returns `true` for the large-object type codes
    #[inline]
    #[must_use]
    pub const fn is_lob(&self) -> bool {
        matches!(self, Self::Blob | Self::Clob)
    }

    /// Get the type code as a lowercase string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::SmallInt => "smallint",
            Self::Integer => "integer",
            Self::BigInt => "bigint",
            Self::Real => "real",
            Self::Double => "double",
            Self::Numeric => "numeric",
            Self::Char => "char",
            Self::Varchar => "varchar",
            Self::Text => "text",
            Self::Date => "date",
            Self::Time => "time",
            Self::Timestamp => "timestamp",
            Self::TimestampTz => "timestamptz",
            Self::Binary => "binary",
            Self::Varbinary => "varbinary",
            Self::Blob => "blob",
            Self::Clob => "clob",
            Self::Uuid => "uuid",
            Self::Object => "object",
            Self::Geometry => "geometry",
            Self::Geography => "geography",
        }
    }
}

impl core::fmt::Display for SqlTypeCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for SqlTypeCode {
    type Err = TypeCodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SqlTypeCode::parse(s).ok_or(TypeCodeParseError)
    }
}

/// Error returned when parsing an unknown type code string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeCodeParseError;

impl core::fmt::Display for TypeCodeParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown sql type code")
    }
}

impl std::error::Error for TypeCodeParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_code_parse() {
        assert_eq!(SqlTypeCode::parse("blob"), Some(SqlTypeCode::Blob));
        assert_eq!(SqlTypeCode::parse("BLOB"), Some(SqlTypeCode::Blob));
        assert_eq!(SqlTypeCode::parse("object"), Some(SqlTypeCode::Object));

        assert_eq!(SqlTypeCode::parse("int"), Some(SqlTypeCode::Integer));
        assert_eq!(SqlTypeCode::parse("int4"), Some(SqlTypeCode::Integer));
        assert_eq!(SqlTypeCode::parse("int8"), Some(SqlTypeCode::BigInt));
        assert_eq!(SqlTypeCode::parse("float8"), Some(SqlTypeCode::Double));

        assert_eq!(SqlTypeCode::parse("unknown"), None);
        assert_eq!(SqlTypeCode::parse(""), None);
    }

    #[test]
    fn test_type_code_families() {
        assert!(SqlTypeCode::Blob.is_binary());
        assert!(SqlTypeCode::Varbinary.is_binary());
        assert!(!SqlTypeCode::Clob.is_binary());

        assert!(SqlTypeCode::Blob.is_lob());
        assert!(SqlTypeCode::Clob.is_lob());
        assert!(!SqlTypeCode::Varbinary.is_lob());
    }

    #[test]
    fn test_type_code_display() {
        assert_eq!(format!("{}", SqlTypeCode::Blob), "blob");
        assert_eq!(format!("{}", SqlTypeCode::Object), "object");
        assert_eq!(format!("{}", SqlTypeCode::TimestampTz), "timestamptz");
    }

    #[test]
    fn test_type_code_from_str() {
        assert_eq!("blob".parse(), Ok(SqlTypeCode::Blob));
        assert_eq!(
            "nope".parse::<SqlTypeCode>(),
            Err(TypeCodeParseError)
        );
    }
}
