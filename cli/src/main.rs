//! aesfold CLI
//!
//! Fast non-cryptographic file checksums.

mod commands;
mod logger;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_mode, hash_files, BackendChoice};
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "aesfold")]
#[command(about = "64-bit non-cryptographic hash built on AES rounds", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash (if no subcommand)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Backend to hash with
    #[arg(short, long, value_enum, default_value_t = BackendChoice::Auto, global = true)]
    backend: BackendChoice,

    /// Print backend selection and timing details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify checksums from file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let backend = cli.backend.resolve()?;
    log::info!("hashing with {backend} backend");

    match &cli.command {
        Some(Commands::Check { checksum_file }) => {
            if !check_mode(checksum_file, backend)? {
                std::process::exit(1);
            }
        }
        None => {
            if cli.files.is_empty() {
                eprintln!("Error: No files specified");
                eprintln!("Usage: aesfold [FILE]... or aesfold --help");
                std::process::exit(1);
            }

            hash_files(&cli.files, backend)?;
        }
    }

    Ok(())
}
