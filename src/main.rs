//! assetgen CLI - build-time asset pipeline
//!
//! Usage: assetgen <COMMAND>
//!
//! Commands:
//!   resize  Upscale 16×16 icons with nearest-neighbor sampling
//!   encode  Regenerate the asset module from SVG/PNG files
//!   check   Verify the asset module is up to date

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use assetgen::commands::{cmd_check, cmd_encode, cmd_resize, report_config_warnings};
use assetgen::config::{Config, EncodeConfig};

/// assetgen - icon upscaling and data-URI asset module generation
#[derive(Parser, Debug)]
#[command(name = "assetgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Config file (defaults to ./assetgen.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Upscale 16×16 icons with nearest-neighbor sampling
    Resize {
        /// Directory containing the source icons
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Output directory (defaults to the sibling x64 directory)
        #[arg(short, long)]
        dest: Option<PathBuf>,
    },

    /// Regenerate the asset module from SVG/PNG files
    Encode {
        /// Asset root scanned recursively
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Generated module path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only verify the module is up to date (exits 1 when stale)
        #[arg(long)]
        check: bool,
    },

    /// Verify the asset module is up to date (exits 1 when stale)
    Check {
        /// Asset root scanned recursively
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Generated module path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    assetgen::logging::init(cli.verbose);

    let cwd = std::env::current_dir()?;
    let (config, warnings) = Config::discover(&cwd, cli.config.as_deref())?;
    report_config_warnings(&warnings);

    match cli.command {
        Commands::Resize { source, dest } => {
            let mut resize = config.resize;
            if let Some(source) = source {
                resize.source = source;
            }
            if let Some(dest) = dest {
                resize.destination = Some(dest);
            }
            cmd_resize(&resize.resize_options(), cli.json)
        }
        Commands::Encode {
            source,
            output,
            check,
        } => {
            let encode = with_encode_overrides(config.encode, source, output);
            if check {
                run_check(&encode, cli.json)
            } else {
                cmd_encode(&encode.encode_options(), cli.json)
            }
        }
        Commands::Check { source, output } => {
            let encode = with_encode_overrides(config.encode, source, output);
            run_check(&encode, cli.json)
        }
    }
}

fn with_encode_overrides(
    mut encode: EncodeConfig,
    source: Option<PathBuf>,
    output: Option<PathBuf>,
) -> EncodeConfig {
    if let Some(source) = source {
        encode.source = source;
    }
    if let Some(output) = output {
        encode.output = output;
    }
    encode
}

fn run_check(encode: &EncodeConfig, json: bool) -> Result<()> {
    let up_to_date = cmd_check(&encode.encode_options(), json)?;
    if !up_to_date {
        std::process::exit(1);
    }
    Ok(())
}
