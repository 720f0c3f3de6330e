use std::env;
use std::fs;
use std::path::Path;
use std::process;

use errgen::{generate_file, GeneratorConfig, WriteOutcome, DEFAULT_CONFIG_FILE};
use tracing_subscriber::EnvFilter;

fn usage() -> ! {
    eprintln!("Usage: errgen <input.rs> [output.rs]");
    eprintln!("       errgen --config <errgen.yaml>");
    eprintln!("       errgen            (reads ./{})", DEFAULT_CONFIG_FILE);
    process::exit(1);
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("errgen=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: &Path) -> GeneratorConfig {
    match GeneratorConfig::load(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

fn run(config: &GeneratorConfig) {
    match generate_file(config) {
        Ok(WriteOutcome::Written) => eprintln!("Wrote error enums to {}", config.output.display()),
        Ok(WriteOutcome::Unchanged) => eprintln!("{} is up to date", config.output.display()),
        Err(e) => {
            eprintln!("Generation error: {}", e);
            process::exit(1);
        }
    }
}

/// Generate to stdout, for `errgen <input.rs>` without an output path
fn print_generated(input_path: &str) {
    let source = match fs::read_to_string(input_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", input_path, e);
            process::exit(1);
        }
    };

    match errgen::generate(&source) {
        Ok(code) => print!("{}", code),
        Err(e) => {
            eprintln!("Generation error: {}", e);
            process::exit(1);
        }
    }
}

fn main() {
    init_logging();
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                usage();
            }
            run(&load_config(path));
        }
        Some("--config") => {
            let Some(path) = args.get(2) else { usage() };
            run(&load_config(Path::new(path)));
        }
        Some("-h") | Some("--help") => usage(),
        Some(input) => match args.get(2) {
            Some(output) => run(&GeneratorConfig::new(input, output)),
            None => print_generated(input),
        },
    }
}
