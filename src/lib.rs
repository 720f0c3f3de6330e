pub mod api;
pub mod builder;
pub mod config;
pub mod emitter;
pub mod error;
pub mod model;
pub mod resolver;
pub mod scanner;

pub use api::{generate, generate_file, generate_with_options, WriteOutcome};
pub use builder::{build, DuplicatePolicy};
pub use config::{GenerateOptions, GeneratorConfig, DEFAULT_CONFIG_FILE};
pub use emitter::{header, render, render_enum};
pub use error::*;
pub use model::*;
pub use resolver::resolve;
pub use scanner::scan;
