//! # webresource CLI
//!
//! Command-line interface rendering JSON and YAML data files as html
//! documents.

mod commands;
mod input;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use input::InputFormat;

#[derive(Parser)]
#[command(name = "webresource")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "webresource.yml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter configuration
    Init {
        /// Target directory (defaults to current directory)
        path: Option<PathBuf>,
    },

    /// Render a data file as an html document
    Render {
        /// JSON or YAML data file
        input: PathBuf,

        /// Optional output file (defaults to stdout)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Input format (defaults to the file extension, else JSON)
        #[arg(long, value_enum)]
        format: Option<InputFormat>,

        /// Base URI of the rendered resource, overriding the configuration
        #[arg(long, env = "WEBRESOURCE_BASE_URI")]
        base_uri: Option<String>,
    },

    /// Print how a data file is classified for rendering
    Describe {
        /// JSON or YAML data file
        input: PathBuf,

        /// Input format (defaults to the file extension, else JSON)
        #[arg(long, value_enum)]
        format: Option<InputFormat>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout carries the rendered documents
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Init { path } => commands::init_project(path.as_deref()),
        Commands::Render {
            input,
            output,
            format,
            base_uri,
        } => {
            let opts = commands::RenderOptions {
                output,
                format,
                base_uri,
            };
            commands::render_file(&cli.config, &input, opts)
        }
        Commands::Describe { input, format } => {
            commands::describe_file(&cli.config, &input, format)
        }
    }
}
