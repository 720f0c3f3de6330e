//! # Enum Model Builder
//!
//! Groups scanned markers into the final set of enums to emit.
//!
//! ## Pipeline
//! 1. Split each marker's variants on whitespace and resolve every token
//! 2. Partition declarations into empty ones and ones with at least one variant
//! 3. Check the concrete declarations for conflicting duplicates (strict policy)
//! 4. Seed the result with the empty declarations, then overwrite with the concrete ones
//!
//! ## Merge Rules
//! - An empty declaration (`ErrorEnum => Never;`) is a placeholder. Any concrete
//!   declaration of the same name supersedes it, whichever comes first in the source.
//! - Repeated empty declarations collapse into one.
//! - Repeated concrete declarations with identical variant lists collapse into one.
//! - Concrete declarations with different variant lists are rejected under
//!   [`DuplicatePolicy::Strict`]. Under [`DuplicatePolicy::Lenient`] the last one wins.
//!
//! ## Example
//! ```rust
//! use errgen::builder::{build, DuplicatePolicy};
//! use errgen::scanner::scan;
//!
//! let source = "// ErrorEnum => A;\n// ErrorEnum => A; X Y\n";
//! let enums = build(scan(source), "error", DuplicatePolicy::Strict).unwrap();
//! assert_eq!(enums.len(), 1);
//! assert_eq!(enums.get("A").unwrap().variants.len(), 2);
//! ```

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Duplicate, GenError};
use crate::model::{EnumSet, EnumSpec, RawMarker};
use crate::resolver::resolve;

/// What to do when an enum name has more than one concrete declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Conflicting concrete declarations fail the run
    #[default]
    Strict,
    /// The last concrete declaration silently wins
    Lenient,
}

/// A resolved marker, remembering where it came from
#[derive(Debug)]
struct Declaration {
    spec: EnumSpec,
    line: usize,
}

/// Build the enum set from the full marker sequence
pub fn build<'a, I>(
    markers: I,
    error_module: &str,
    policy: DuplicatePolicy,
) -> Result<EnumSet, GenError>
where
    I: IntoIterator<Item = RawMarker<'a>>,
{
    let (empty, concrete): (Vec<Declaration>, Vec<Declaration>) = markers
        .into_iter()
        .map(|marker| declare(marker, error_module))
        .partition(|decl| decl.spec.is_empty());

    if policy == DuplicatePolicy::Strict {
        check_duplicates(&concrete)?;
    }

    let mut enums = EnumSet::new();
    for decl in empty {
        enums.insert(decl.spec);
    }
    for decl in concrete {
        let line = decl.line;
        let replaced = enums.insert(decl.spec);
        if let Some(previous) = replaced.filter(|p| !p.is_empty()) {
            let current = enums.get(&previous.name).map(|e| &e.variants);
            if current != Some(&previous.variants) {
                warn!(
                    name = %previous.name,
                    line,
                    "enum declared again with different variants; keeping the later declaration"
                );
            }
        }
    }

    Ok(enums)
}

fn declare(marker: RawMarker<'_>, error_module: &str) -> Declaration {
    let name = marker.enum_name;
    if name.is_empty() || name.contains(char::is_whitespace) {
        warn!(
            name,
            line = marker.line,
            "enum name is empty or contains whitespace; the generated code will not compile"
        );
    }

    let variants: Vec<_> = marker
        .raw_variants
        .split_whitespace()
        .filter_map(|token| resolve(token, error_module))
        .inspect(|v| {
            debug!(
                enum_name = name,
                variant = %v.display_name,
                path = %v.import_path,
                "resolved variant"
            )
        })
        .collect();

    debug!(enum_name = name, line = marker.line, variants = variants.len(), "declaration");

    Declaration {
        spec: EnumSpec::new(name, variants),
        line: marker.line,
    }
}

/// Reject names declared more than once with differing variant lists.
///
/// All concrete declarations are grouped by name before anything is merged,
/// so every conflicting name is reported at once.
fn check_duplicates(concrete: &[Declaration]) -> Result<(), GenError> {
    let mut groups: Vec<(&str, Vec<&Declaration>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for decl in concrete {
        let name = decl.spec.name.as_str();
        match index.get(name) {
            Some(&i) => groups[i].1.push(decl),
            None => {
                index.insert(name, groups.len());
                groups.push((name, vec![decl]));
            }
        }
    }

    let duplicates: Vec<Duplicate> = groups
        .into_iter()
        .filter(|(_, decls)| {
            let first = &decls[0].spec.variants;
            decls.iter().any(|d| d.spec.variants != *first)
        })
        .map(|(name, decls)| Duplicate {
            name: name.to_string(),
            lines: decls.iter().map(|d| d.line).collect(),
        })
        .collect();

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(GenError::DuplicateEnumDeclaration { duplicates })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan;

    fn build_strict(source: &str) -> Result<EnumSet, GenError> {
        build(scan(source), "error", DuplicatePolicy::Strict)
    }

    fn variant_names(enums: &EnumSet, name: &str) -> Vec<String> {
        enums
            .get(name)
            .map(|e| e.variants.iter().map(|v| v.display_name.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_no_markers_builds_empty_set() {
        let enums = build_strict("fn main() {}").unwrap();
        assert!(enums.is_empty());
    }

    #[test]
    fn test_end_to_end_example() {
        let enums = build_strict("ErrorEnum => IoFail; timeout *net::ConnReset").unwrap();
        let spec = enums.get("IoFail").unwrap();
        assert_eq!(spec.variants.len(), 2);
        assert_eq!(spec.variants[0].wrapped_type(), "error::timeout");
        assert_eq!(spec.variants[1].wrapped_type(), "net::ConnReset");
    }

    #[test]
    fn test_extra_whitespace_between_tokens() {
        let enums = build_strict("ErrorEnum => A;   X \t  Y   ").unwrap();
        assert_eq!(variant_names(&enums, "A"), vec!["X", "Y"]);
    }

    #[test]
    fn test_empty_then_concrete() {
        let enums = build_strict("ErrorEnum => A;\nErrorEnum => A; X Y\n").unwrap();
        assert_eq!(enums.len(), 1);
        assert_eq!(variant_names(&enums, "A"), vec!["X", "Y"]);
    }

    #[test]
    fn test_concrete_then_empty() {
        let enums = build_strict("ErrorEnum => A; X Y\nErrorEnum => A;\n").unwrap();
        assert_eq!(enums.len(), 1);
        assert_eq!(variant_names(&enums, "A"), vec!["X", "Y"]);
    }

    #[test]
    fn test_repeated_empty_declarations_collapse() {
        let enums = build_strict("ErrorEnum => Never;\nErrorEnum => Never;\n").unwrap();
        assert_eq!(enums.len(), 1);
        assert!(enums.get("Never").unwrap().is_empty());
    }

    #[test]
    fn test_bare_star_counts_as_empty() {
        let enums = build_strict("ErrorEnum => A; *\nErrorEnum => A; X\n").unwrap();
        assert_eq!(variant_names(&enums, "A"), vec!["X"]);
    }

    #[test]
    fn test_identical_concrete_duplicates_are_accepted() {
        let enums = build_strict("ErrorEnum => A; X Y\nErrorEnum => A; X  Y\n").unwrap();
        assert_eq!(enums.len(), 1);
        assert_eq!(variant_names(&enums, "A"), vec!["X", "Y"]);
    }

    #[test]
    fn test_conflicting_duplicates_are_rejected() {
        let source = "ErrorEnum => A; X\nErrorEnum => B; Z\nErrorEnum => A; Y\n";
        let result = build_strict(source);
        match result {
            Err(GenError::DuplicateEnumDeclaration { duplicates }) => {
                assert_eq!(
                    duplicates,
                    vec![Duplicate {
                        name: "A".to_string(),
                        lines: vec![1, 3],
                    }]
                );
            }
            other => panic!("Expected DuplicateEnumDeclaration but got: {:?}", other),
        }
    }

    #[test]
    fn test_reordered_variants_conflict() {
        let result = build_strict("ErrorEnum => A; X Y\nErrorEnum => A; Y X\n");
        assert!(matches!(result, Err(GenError::DuplicateEnumDeclaration { .. })));
    }

    #[test]
    fn test_same_name_different_path_conflicts() {
        let result = build_strict("ErrorEnum => A; X\nErrorEnum => A; *other::X\n");
        assert!(matches!(result, Err(GenError::DuplicateEnumDeclaration { .. })));
    }

    #[test]
    fn test_all_conflicting_names_are_reported() {
        let source = "ErrorEnum => B; X\n\
                      ErrorEnum => A; X\n\
                      ErrorEnum => B; Y\n\
                      ErrorEnum => A; Y\n\
                      ErrorEnum => C; Z\n";
        let err = build_strict(source).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("B (lines 1, 3)"), "Got: {}", message);
        assert!(message.contains("A (lines 2, 4)"), "Got: {}", message);
        assert!(!message.contains("C ("), "Got: {}", message);
    }

    #[test]
    fn test_lenient_last_write_wins() {
        let source = "ErrorEnum => A; X\nErrorEnum => A; Y\n";
        let enums = build(scan(source), "error", DuplicatePolicy::Lenient).unwrap();
        assert_eq!(enums.len(), 1);
        assert_eq!(variant_names(&enums, "A"), vec!["Y"]);
    }

    #[test]
    fn test_order_empty_names_first_then_new_names() {
        let source = "ErrorEnum => B; X\n\
                      ErrorEnum => A;\n\
                      ErrorEnum => C; Y\n\
                      ErrorEnum => B;\n";
        let enums = build_strict(source).unwrap();
        assert_eq!(enums.names().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(variant_names(&enums, "B"), vec!["X"]);
    }

    #[test]
    fn test_custom_error_module() {
        let enums = build(scan("ErrorEnum => A; X"), "failures", DuplicatePolicy::Strict).unwrap();
        assert_eq!(enums.get("A").unwrap().variants[0].import_path, "failures::");
    }
}
