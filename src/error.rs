//! # Error Types
//!
//! This module defines all error types for the errgen generator.
//!
//! Every failure is fatal to a generation run: nothing is written to the
//! output file once an error has been raised.
//!
//! ## Error Types
//! - `DuplicateEnumDeclaration` - The same enum was declared twice with different variants
//! - `ConfigError` - Invalid or incomplete YAML configuration
//! - `ReadError` / `WriteError` - File system failures in the driver
//!
//! Text that does not match the marker shape is never an error; it is simply
//! not scanned.
//!
//! ## Usage
//! ```rust
//! use errgen::{generate, GenError};
//!
//! let source = "// ErrorEnum => A; X\n// ErrorEnum => A; Y\n";
//! match generate(source) {
//!     Ok(code) => println!("{}", code),
//!     Err(GenError::DuplicateEnumDeclaration { duplicates }) => {
//!         for dup in &duplicates {
//!             eprintln!("{} declared on lines {:?}", dup.name, dup.lines);
//!         }
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// One enum name that was given conflicting concrete declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    pub name: String,
    /// Lines of every with-variants declaration of `name`, in source order.
    pub lines: Vec<usize>,
}

impl fmt::Display for Duplicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.lines.iter().map(|l| l.to_string()).collect();
        write!(f, "{} (lines {})", self.name, lines.join(", "))
    }
}

fn join_duplicates(duplicates: &[Duplicate]) -> String {
    duplicates
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Error, Debug)]
pub enum GenError {
    /// More than one concrete declaration for the same enum name.
    ///
    /// # Example
    /// ```
    /// # use errgen::{Duplicate, GenError};
    /// let err = GenError::DuplicateEnumDeclaration {
    ///     duplicates: vec![Duplicate { name: "IoFail".to_string(), lines: vec![3, 9] }],
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Duplicate enum declaration: IoFail (lines 3, 9); remove the duplicate definition or rename the enum"
    /// );
    /// ```
    #[error(
        "Duplicate enum declaration: {}; remove the duplicate definition or rename the enum",
        join_duplicates(.duplicates)
    )]
    DuplicateEnumDeclaration { duplicates: Vec<Duplicate> },

    /// Invalid configuration.
    ///
    /// # Example
    /// ```
    /// # use errgen::GenError;
    /// let err = GenError::ConfigError("missing field `input`".to_string());
    /// assert_eq!(err.to_string(), "Invalid config: missing field `input`");
    /// ```
    #[error("Invalid config: {0}")]
    ConfigError(String),

    #[error("Error reading '{}': {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing '{}': {source}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
