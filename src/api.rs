//! # Public API
//!
//! Entry points for the errgen library.
//!
//! ## Generation Functions
//!
//! - [`generate()`] - Pure text-to-text generation with default options
//! - [`generate_with_options()`] - Custom error module or duplicate policy
//! - [`generate_file()`] - Read the input file, generate, write the output file
//!
//! ## Typical Usage
//!
//! ```rust
//! use errgen::generate;
//!
//! let source = r#"
//! // ErrorEnum => IoFail; timeout *net::ConnReset
//! "#;
//!
//! let code = generate(source)?;
//! assert!(code.contains("pub enum IoFail {"));
//! assert!(code.contains("ConnReset(#[from] net::ConnReset),"));
//! # Ok::<(), errgen::GenError>(())
//! ```
//!
//! ## From a Build Script
//!
//! ```rust,no_run
//! use errgen::{generate_file, GeneratorConfig};
//!
//! let config = GeneratorConfig::new("src/protocol.rs", "src/request_errors.rs");
//! generate_file(&config)?;
//! println!("cargo:rerun-if-changed=src/protocol.rs");
//! # Ok::<(), errgen::GenError>(())
//! ```

use std::fs;

use tracing::{debug, info};

use crate::{build, render, scan, GenError, GenerateOptions, GeneratorConfig};

/// Generate the error enum file for `source` with default options.
///
/// # Pipeline
/// 1. Scan the source for `ErrorEnum =>` markers
/// 2. Resolve variants and merge declarations into an enum set
/// 3. Render the header and every enum
///
/// # Errors
/// Returns [`GenError::DuplicateEnumDeclaration`] if an enum is declared twice
/// with different variants.
pub fn generate(source: &str) -> Result<String, GenError> {
    generate_with_options(source, &GenerateOptions::default())
}

/// Generate with an explicit error module and duplicate policy.
///
/// # Example
/// ```rust
/// use errgen::{generate_with_options, DuplicatePolicy, GenerateOptions};
///
/// let options = GenerateOptions {
///     error_module: "failures".to_string(),
///     duplicates: DuplicatePolicy::Lenient,
/// };
/// let code = generate_with_options("// ErrorEnum => E; Timeout", &options)?;
/// assert!(code.contains("use crate::failures;"));
/// assert!(code.contains("Timeout(#[from] failures::Timeout),"));
/// # Ok::<(), errgen::GenError>(())
/// ```
pub fn generate_with_options(source: &str, options: &GenerateOptions) -> Result<String, GenError> {
    options.validate()?;
    let enums = build(scan(source), &options.error_module, options.duplicates)?;
    debug!(enums = enums.len(), "built enum set");
    Ok(render(&enums, &options.error_module))
}

/// Whether [`generate_file()`] touched the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// The output already had the generated content and was left alone
    Unchanged,
}

/// Run one generation from file to file.
///
/// The output is only written when its content changes, so unchanged
/// sources do not trigger a rebuild of the generated module. Nothing is
/// written if generation fails.
pub fn generate_file(config: &GeneratorConfig) -> Result<WriteOutcome, GenError> {
    info!(input = %config.input.display(), output = %config.output.display(), "generating error enums");

    let source = fs::read_to_string(&config.input).map_err(|source| GenError::ReadError {
        path: config.input.clone(),
        source,
    })?;
    let code = generate_with_options(&source, &config.options)?;

    if fs::read_to_string(&config.output).is_ok_and(|existing| existing == code) {
        info!(output = %config.output.display(), "output is up to date");
        return Ok(WriteOutcome::Unchanged);
    }

    fs::write(&config.output, &code).map_err(|source| GenError::WriteError {
        path: config.output.clone(),
        source,
    })?;
    info!(output = %config.output.display(), bytes = code.len(), "wrote generated enums");
    Ok(WriteOutcome::Written)
}
