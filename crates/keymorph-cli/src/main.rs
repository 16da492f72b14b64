//! keymorph CLI
//!
//! Reshape JSON documents from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use keymorph_core::CaseStyle;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod document;

/// keymorph - rename keys and prune empty entries in nested data
#[derive(Parser)]
#[command(name = "keymorph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform a JSON document
    Transform {
        /// Input file (reads stdin when omitted or "-")
        input: Option<String>,

        /// YAML file with transform options
        #[arg(short, long, env = "KEYMORPH_CONFIG")]
        config: Option<String>,

        /// Override a single option, e.g. --set key_case=snake
        #[arg(short = 's', long = "set", value_name = "NAME=VALUE")]
        options: Vec<String>,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },

    /// Drop nil, empty-list and empty-map values at any depth
    Prune {
        /// Input file (reads stdin when omitted or "-")
        input: Option<String>,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },

    /// Convert words between naming conventions
    Case {
        /// Target style: snake, camel, pascal, module_path or path
        style: CaseStyle,

        /// Words to convert
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. Output goes to stdout, so logs go to stderr.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Transform {
            input,
            config,
            options,
            pretty,
        } => {
            commands::transform::run(input.as_deref(), config.as_deref(), &options, pretty)?;
        }
        Commands::Prune { input, pretty } => {
            commands::prune::run(input.as_deref(), pretty)?;
        }
        Commands::Case { style, words } => {
            commands::case::run(style, &words)?;
        }
    }

    Ok(())
}
