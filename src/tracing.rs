//! Tracing utilities for dialect configuration observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]`
//! boilerplate at every call site.

/// Emit a debug-level tracing event when a column type is registered.
///
/// ```ignore
/// dialect_trace_register!(code, name);
/// ```
#[macro_export]
macro_rules! dialect_trace_register {
    ($code:expr, $name:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(code = %$code, column_type = %$name, "dialect.register_column_type");
    };
}

/// Emit a debug-level tracing event when a descriptor is remapped.
///
/// ```ignore
/// dialect_trace_remap!(input, output);
/// ```
#[macro_export]
macro_rules! dialect_trace_remap {
    ($from:expr, $to:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(from = %$from, to = %$to, "dialect.remap_descriptor");
    };
}
