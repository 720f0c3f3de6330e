//! # Model Types
//!
//! This module defines the in-memory description of the error enums to generate.
//!
//! ## Type Hierarchy
//! ```text
//! RawMarker (one scanner hit, borrowed from the input)
//!   ├── enum_name: &str
//!   ├── raw_variants: &str (whitespace-separated tokens, possibly empty)
//!   └── line: usize
//!
//! EnumSet (final mapping, unique names, stable order)
//!   └── Vec<EnumSpec>
//!         ├── name: String
//!         └── Vec<VariantSpec>
//!               ├── display_name: String ("ConnReset")
//!               └── import_path: String  ("net::", always ends with "::")
//! ```
//!
//! ## Lifecycle
//! `RawMarker` is transient and produced lazily by the scanner. `EnumSpec`
//! values are built by the builder and may be replaced by a later declaration
//! of the same name before the finished `EnumSet` is handed to the emitter.
//!
//! ## Related Modules
//! - `scanner` - Produces `RawMarker`s
//! - `resolver` - Produces `VariantSpec`s
//! - `builder` - Produces the `EnumSet`
//! - `emitter` - Renders the `EnumSet`

use std::collections::HashMap;

/// Path separator used in variant tokens and in generated paths.
pub const PATH_SEPARATOR: &str = "::";

/// One `ErrorEnum => Name; tokens` declaration found in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMarker<'a> {
    pub enum_name: &'a str,
    pub raw_variants: &'a str,
    /// 1-based line of the marker in the input
    pub line: usize,
}

/// A resolved enum case wrapping `{import_path}{display_name}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantSpec {
    pub display_name: String,
    pub import_path: String,
}

impl VariantSpec {
    /// Fully qualified type of the wrapped error, e.g. `error::timeout`
    pub fn wrapped_type(&self) -> String {
        format!("{}{}", self.import_path, self.display_name)
    }
}

/// One enum to emit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumSpec {
    pub name: String,
    pub variants: Vec<VariantSpec>,
}

impl EnumSpec {
    pub fn new(name: impl Into<String>, variants: Vec<VariantSpec>) -> Self {
        Self {
            name: name.into(),
            variants,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

/// Mapping from enum name to its final `EnumSpec`.
///
/// Names are unique. Iteration follows first insertion; replacing an entry
/// keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumSet {
    enums: Vec<EnumSpec>,
    index: HashMap<String, usize>,
}

impl EnumSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `spec`, replacing any entry with the same name.
    ///
    /// Returns the replaced spec, if there was one.
    pub fn insert(&mut self, spec: EnumSpec) -> Option<EnumSpec> {
        match self.index.get(&spec.name) {
            Some(&i) => Some(std::mem::replace(&mut self.enums[i], spec)),
            None => {
                self.index.insert(spec.name.clone(), self.enums.len());
                self.enums.push(spec);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&EnumSpec> {
        self.index.get(name).map(|&i| &self.enums[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EnumSpec> {
        self.enums.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.enums.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.enums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enums.is_empty()
    }
}

impl<'a> IntoIterator for &'a EnumSet {
    type Item = &'a EnumSpec;
    type IntoIter = std::slice::Iter<'a, EnumSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
