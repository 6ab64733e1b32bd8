//! Checkconfig CLI
//!
//! Entry point for the `checkconfig` command-line tool.

use checkconfig::{load_input, run_checks, CheckOptions, CheckReport};
use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "checkconfig")]
#[command(about = "Check merge policy, plugin and job configuration for consistency", version)]
struct Cli {
    /// Path to the resolved input snapshot (.toml or .json)
    #[arg(long, short = 'i')]
    input: PathBuf,

    /// Comma-delimited list of checks to run (default: all)
    #[arg(long, value_delimiter = ',')]
    warnings: Vec<String>,

    /// Treat advisory findings as failures
    #[arg(long)]
    strict: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("checkconfig=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let options = match CheckOptions::from_names(&cli.warnings, cli.strict) {
        Ok(o) => o,
        Err(e) => {
            error!(component = "checkconfig", "Invalid options: {}", e);
            process::exit(2);
        }
    };

    let input = match load_input(&cli.input) {
        Ok(i) => i,
        Err(e) => {
            error!(component = "checkconfig", "Error loading input: {}", e);
            process::exit(2);
        }
    };
    info!(
        component = "checkconfig",
        input = %input.path.display(),
        digest = %input.digest,
        "Loaded input"
    );

    let errs = run_checks(&input.bundle, &options);
    for item in errs.strings() {
        warn!(component = "checkconfig", "{}", item);
    }

    let report = CheckReport::new(&options, &errs).with_input(&input);
    if cli.json {
        match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!(component = "checkconfig", "Error serializing report: {}", e);
                process::exit(2);
            }
        }
    } else {
        println!("{}", report.to_human());
    }

    if report.failed {
        if options.strict {
            error!(component = "checkconfig", "Strict is set and there were warnings");
        }
        process::exit(1);
    }
}
