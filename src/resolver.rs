//! # Variant Resolver
//!
//! Turns one variant token into the case name and the module path of the
//! error type it wraps.
//!
//! ## Token Grammar
//! - `Name` resolves against the shared error module: `error::Name`
//! - `*path::to::Name` is fully qualified: the last segment is the case name,
//!   everything before it is the import path
//!
//! Resolution is purely textual. Nothing checks that the referenced error type
//! exists; the compiler will do that when it builds the generated file.
//!
//! ## Example
//! ```rust
//! use errgen::resolver::resolve;
//!
//! let v = resolve("*net::ConnReset", "error").unwrap();
//! assert_eq!(v.display_name, "ConnReset");
//! assert_eq!(v.import_path, "net::");
//!
//! let v = resolve("timeout", "error").unwrap();
//! assert_eq!(v.import_path, "error::");
//! ```

use crate::model::{VariantSpec, PATH_SEPARATOR};

/// Prefix marking a fully qualified variant token
pub const QUALIFIED_PREFIX: char = '*';

/// Module that unqualified variants are resolved against
pub const DEFAULT_ERROR_MODULE: &str = "error";

/// Resolve a single variant token.
///
/// Returns `None` for tokens that name no variant at all (empty, whitespace,
/// or a bare `*`); callers drop those.
pub fn resolve(token: &str, error_module: &str) -> Option<VariantSpec> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    match token.strip_prefix(QUALIFIED_PREFIX) {
        Some(path) => resolve_qualified(path),
        None => Some(VariantSpec {
            display_name: token.to_string(),
            import_path: format!("{}{}", error_module, PATH_SEPARATOR),
        }),
    }
}

fn resolve_qualified(path: &str) -> Option<VariantSpec> {
    let (prefix, name) = match path.rsplit_once(PATH_SEPARATOR) {
        Some((prefix, name)) => (prefix, name),
        None => ("", path),
    };
    if name.is_empty() {
        return None;
    }

    // A single segment keeps the separator, which makes the path absolute (`::Name`).
    Some(VariantSpec {
        display_name: name.to_string(),
        import_path: format!("{}{}", prefix, PATH_SEPARATOR),
    })
}
