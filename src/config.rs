//! # Configuration
//!
//! Generator settings, either built in code or loaded from a YAML file.
//!
//! ## File Format
//! ```yaml
//! input: src/protocol.rs          # annotated source (required)
//! output: src/request_errors.rs   # generated file (required)
//! error-module: error             # shared error module (default: error)
//! duplicates: strict              # strict | lenient (default: strict)
//! ```
//!
//! Relative `input` and `output` paths are resolved against the directory
//! containing the config file, so the generator can be run from anywhere.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::builder::DuplicatePolicy;
use crate::error::GenError;
use crate::resolver::DEFAULT_ERROR_MODULE;

/// Default config file name looked up by the CLI
pub const DEFAULT_CONFIG_FILE: &str = "errgen.yaml";

/// Options that shape the generated code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Module that unqualified variants live in, imported as `use crate::<module>;`
    pub error_module: String,
    pub duplicates: DuplicatePolicy,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            error_module: DEFAULT_ERROR_MODULE.to_string(),
            duplicates: DuplicatePolicy::default(),
        }
    }
}

impl GenerateOptions {
    pub fn validate(&self) -> Result<(), GenError> {
        if is_valid_module_name(&self.error_module) {
            Ok(())
        } else {
            Err(GenError::ConfigError(format!(
                "error-module must be a single identifier, got '{}'",
                self.error_module
            )))
        }
    }
}

/// Everything the driver needs for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: GenerateOptions,
}

/// Raw config for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    error_module: Option<String>,
    duplicates: Option<DuplicatePolicy>,
}

impl GeneratorConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            options: GenerateOptions::default(),
        }
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, GenError> {
        let content = fs::read_to_string(path).map_err(|source| GenError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_yaml(&content, base_dir)
    }

    /// Parse config YAML, resolving relative paths against `base_dir`
    pub fn from_yaml(content: &str, base_dir: &Path) -> Result<Self, GenError> {
        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| GenError::ConfigError(e.to_string()))?;

        let input = raw
            .input
            .ok_or_else(|| GenError::ConfigError("missing required key 'input'".to_string()))?;
        let output = raw
            .output
            .ok_or_else(|| GenError::ConfigError("missing required key 'output'".to_string()))?;

        let defaults = GenerateOptions::default();
        let options = GenerateOptions {
            error_module: raw.error_module.unwrap_or(defaults.error_module),
            duplicates: raw.duplicates.unwrap_or(defaults.duplicates),
        };
        options.validate()?;

        Ok(Self {
            input: base_dir.join(input),
            output: base_dir.join(output),
            options,
        })
    }
}

fn is_valid_module_name(module: &str) -> bool {
    let mut chars = module.chars();
    let starts_ok = matches!(chars.next(), Some(c) if c == '_' || c.is_alphabetic());
    starts_ok && chars.all(|c| c == '_' || c.is_alphanumeric())
}
