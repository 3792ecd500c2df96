//! Binary to generate Dart model classes from a sample JSON document.
//!
//! Usage: `decodefy <class_name> <json_data>`
//!
//! Writes `<class_name in snake_case>_model.dart` to the current directory.

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use decodefy::{DecodefyError, GenerateSettings, generate_to_file};
use tracing::Level;

const USAGE: &str = "Usage: decodefy <class_name> <json_data>";

/// Generate Dart model classes from a sample JSON document
#[derive(Parser, Debug)]
#[command(name = "decodefy", version)]
struct Cli {
    /// Name of the top-level class, e.g. `UserProfile`
    #[arg(allow_hyphen_values = true)]
    class_name: String,

    /// JSON object literal, passed as a single argument
    #[arg(allow_hyphen_values = true)]
    json_data: String,

    /// Directory to write the model file to (default: current directory)
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Do not warn about class names generated more than once
    #[arg(long)]
    no_collision_warnings: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level: Level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn exit_with(error: &DecodefyError) -> ! {
    println!("{error}");
    process::exit(1);
}

fn main() {
    // Help and version requests are one-argument calls too.
    let Ok(cli) = Cli::try_parse() else {
        exit_with(&DecodefyError::UsageError(USAGE.to_string()));
    };
    init_tracing(cli.verbose);

    let settings: GenerateSettings = GenerateSettings {
        output_dir: cli.out_dir.unwrap_or_default(),
        suppress_collision_warnings: cli.no_collision_warnings,
    };
    match generate_to_file(&cli.class_name, &cli.json_data, &settings) {
        Ok(path) => println!("Generated {}", path.display()),
        Err(e) => exit_with(&e),
    }
}
