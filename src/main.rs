#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use caesar_core::analysis::{ReferenceError, ReferenceTable};
use caesar_core::cipher::{decrypt, encrypt};
use caesar_core::cracking::Cracker;
use caesar_core::types::Key;

#[derive(Debug, Parser)]
#[command(name = "caesar")]
#[command(about = "Encrypt, decrypt, or crack Caesar-shifted text files")]
struct Args {
    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "warn")]
    log: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Shift every letter forward by the key letter.
    Encrypt { text_file: PathBuf, key: Key },
    /// Shift every letter back by the key letter.
    Decrypt { text_file: PathBuf, key: Key },
    /// Recover the plaintext without the key.
    Crack {
        text_file: PathBuf,
        /// 26 letter frequencies, one per line, A to Z. Defaults to English.
        reference_file: Option<PathBuf>,

        /// Print the full report as JSON instead of the plaintext.
        #[arg(long)]
        json: bool,

        /// Log the N best candidate keys at info level.
        #[arg(long, default_value_t = 0)]
        top: usize,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Reference(#[from] ReferenceError),
    #[error("cannot render report: {0}")]
    Json(#[from] serde_json::Error),
}

fn read_text(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn load_reference(path: Option<&Path>) -> Result<ReferenceTable, CliError> {
    match path {
        Some(path) => Ok(ReferenceTable::from_path(path)?),
        None => Ok(ReferenceTable::english()),
    }
}

fn run(command: Command) -> Result<String, CliError> {
    match command {
        Command::Encrypt { text_file, key } => {
            tracing::debug!(file = %text_file.display(), %key, "encrypting");
            Ok(encrypt(&read_text(&text_file)?, key))
        }
        Command::Decrypt { text_file, key } => {
            tracing::debug!(file = %text_file.display(), %key, "decrypting");
            Ok(decrypt(&read_text(&text_file)?, key))
        }
        Command::Crack {
            text_file,
            reference_file,
            json,
            top,
        } => {
            let text = read_text(&text_file)?;
            let reference = load_reference(reference_file.as_deref())?;
            let report = Cracker::default().crack_report(&text, &reference);

            for candidate in report.ranked().iter().take(top) {
                tracing::info!(key = %candidate.key, score = candidate.score, "candidate");
            }

            if json {
                Ok(serde_json::to_string_pretty(&report)?)
            } else {
                Ok(report.plaintext)
            }
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(args.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "caesar failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
