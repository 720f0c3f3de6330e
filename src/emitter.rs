//! # Emitter
//!
//! Renders the enum set as Rust source.
//!
//! ## Output Layout
//! ```text
//! use serde::{Deserialize, Serialize};
//! use thiserror::Error;
//! use crate::error;
//!
//! #[derive(Error, Debug, Serialize, Deserialize)]
//! pub enum IoFail {
//!     #[error(transparent)]
//!     timeout(#[from] error::timeout),
//!     #[error(transparent)]
//!     ConnReset(#[from] net::ConnReset),
//! }
//! ```
//!
//! Every case delegates `Display` and `source()` to the wrapped error and gets
//! a `From` impl. An enum without variants renders as an empty (uninhabited) enum.
//! Rendering is plain templating and cannot fail.

use crate::model::{EnumSet, EnumSpec};

/// Derives placed on every generated enum
const DERIVES: &str = "#[derive(Error, Debug, Serialize, Deserialize)]";

/// File header: the serde traits, the thiserror derive and the shared error module
pub fn header(error_module: &str) -> String {
    let mut out = String::new();
    out.push_str("use serde::{Deserialize, Serialize};\n");
    out.push_str("use thiserror::Error;\n");
    out.push_str(&format!("use crate::{};\n", error_module));
    out
}

/// Render a single enum definition, preceded by a blank line
pub fn render_enum(spec: &EnumSpec) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(DERIVES);
    out.push('\n');
    out.push_str(&format!("pub enum {} {{\n", spec.name));
    for variant in &spec.variants {
        out.push_str("    #[error(transparent)]\n");
        out.push_str(&format!(
            "    {}(#[from] {}),\n",
            variant.display_name,
            variant.wrapped_type()
        ));
    }
    out.push_str("}\n");
    out
}

/// Render the complete generated file: header, then every enum in set order
pub fn render(enums: &EnumSet, error_module: &str) -> String {
    let mut out = header(error_module);
    for spec in enums {
        out.push_str(&render_enum(spec));
    }
    out
}
