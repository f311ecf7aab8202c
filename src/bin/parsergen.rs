//! parsergen: Generate ArduinoJson parsing code from a sample JSON document
//!
//! Usage:
//!   # Read from file, output to stdout
//!   parsergen weather.json
//!
//!   # Read from stdin with an explicit buffer size
//!   echo '{"sensor": "gps", "time": 1351824120}' | parsergen --buffer-size "JSON_OBJECT_SIZE(2)"
//!
//!   # Load thresholds from a config file and write to a file
//!   parsergen data.json --config parsergen.json --output parser.inc

use anyhow::{Context, Result};
use clap::Parser;
use parsergen::{capacity_expression, GeneratorConfig, ParserGenerator};
use serde_json::Value;
use std::fs::File;
use std::io::{stdin, Read};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "parsergen")]
#[command(about = "Generate ArduinoJson parsing code from a JSON document", long_about = None)]
struct Args {
    /// Input file (use stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Expression for the buffer size, copied verbatim into the output
    /// If omitted, one is computed from the document structure
    #[arg(long, short = 'b')]
    buffer_size: Option<String>,

    /// Output file (stdout if omitted)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// JSON file with generator settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Children allowed before a named reference is introduced (default: 2)
    #[arg(long)]
    max_inline_children: Option<usize>,

    /// Elements extracted from a named array (default: 4)
    #[arg(long)]
    max_named_array_elements: Option<usize>,

    /// Nesting depth above which the depth is passed to the parser (default: 10)
    #[arg(long)]
    nesting_hint_threshold: Option<usize>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = build_config(&args)?;
    debug!(?config, "generator config");

    let mut json = String::new();
    match &args.input {
        Some(path) => {
            File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?
                .read_to_string(&mut json)
                .with_context(|| format!("Failed to read {}", path.display()))?;
        }
        None => {
            stdin()
                .read_to_string(&mut json)
                .context("Failed to read stdin")?;
        }
    }

    let root: Value = serde_json::from_str(&json).context("Failed to parse JSON")?;
    let buffer_size = match args.buffer_size {
        Some(expr) => expr,
        None => {
            let expr = capacity_expression(&root);
            info!(%expr, "computed buffer size");
            expr
        }
    };

    let program = ParserGenerator::new(config)
        .generate_value(&root, &buffer_size)
        .context("Failed to generate parser")?;

    match args.output {
        Some(path) => std::fs::write(&path, format!("{}\n", program))
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{}", program),
    }

    Ok(())
}

/// Load the config file if any, then apply command line overrides
fn build_config(args: &Args) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => GeneratorConfig::default(),
    };

    if let Some(n) = args.max_inline_children {
        config.max_inline_children = n;
    }
    if let Some(n) = args.max_named_array_elements {
        config.max_named_array_elements = n;
    }
    if let Some(n) = args.nesting_hint_threshold {
        config.nesting_hint_threshold = n;
    }

    Ok(config)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
