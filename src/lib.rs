#![forbid(unsafe_code)]

use clap::{CommandFactory, Parser};
use std::io::{self, Write};
use tracing::{error, info};

pub mod cli;
pub mod error;
pub mod hash;
pub mod logging;

pub const VERSION_INFO: &str = "gohash 1.0";

/// Main entry point that handles all errors internally and returns exit code
pub fn run() -> u8 {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose);
    run_with_cli(cli)
}

pub fn run_with_cli(cli: cli::Cli) -> u8 {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = match execute(&cli, &mut out).and_then(|()| out.flush()) {
        Ok(()) => cli::Outcome::Reported,
        Err(err) => {
            error!(error = %err, "cannot write to stdout");
            cli::Outcome::OutputFailed
        }
    };
    cli::exit_code(outcome)
}

/// Runs one invocation against `out`. Hashing failures are written as an
/// `error:` line and are not returned; only write failures on `out` are.
pub fn execute<W: Write>(cli: &cli::Cli, out: &mut W) -> io::Result<()> {
    // Handle immediate flags that don't require a file
    if cli.help {
        return write_help(out);
    }

    if cli.version {
        return writeln!(out, "{VERSION_INFO}");
    }

    if cli.describe {
        return write_operator_json(out);
    }

    let path = cli.file();
    match hash::hash_file_by_name(path, &cli.algorithm) {
        Ok(digest) => {
            info!(path = %path.display(), algorithm = %cli.algorithm, "hashed");
            writeln!(out, "{digest}")
        }
        Err(err) => {
            info!(path = %path.display(), algorithm = %cli.algorithm, error = ?err, "hash failed");
            writeln!(out, "error: {err}")
        }
    }
}

fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    let help = cli::Cli::command().render_help();
    write!(out, "{help}")
}

pub fn operator_json() -> serde_json::Value {
    let algorithms: Vec<_> = cli::Algorithm::ALL
        .iter()
        .map(|algorithm| {
            serde_json::json!({
                "name": algorithm,
                "width": algorithm.width(),
                "family": algorithm.family()
            })
        })
        .collect();

    serde_json::json!({
        "schema_version": "operator.v0",
        "name": "gohash",
        "version": "1.0",
        "description": "Computes a CRC, Adler or FNV checksum of a file's contents",
        "license": "MIT",
        "invocation": {
            "binary": "gohash",
            "usage": cli::USAGE,
            "output_mode": "text"
        },
        "arguments": [
            {
                "name": "file",
                "type": "file_path",
                "required": true,
                "position": 0,
                "description": "File to hash; further positional arguments are ignored"
            }
        ],
        "options": [
            {
                "name": "algorithm",
                "flag": "-a",
                "type": "string",
                "default": "crc32",
                "description": "Hash algorithm name"
            }
        ],
        "algorithms": algorithms,
        "errors": [
            {
                "code": "unknown algorithm",
                "message": "The -a value names no supported algorithm"
            },
            {
                "code": "io",
                "message": "The file could not be read; the OS message is printed as-is"
            }
        ],
        "exit_codes": {
            "0": { "meaning": "REPORTED", "domain": "positive" },
            "1": { "meaning": "OUTPUT_FAILED", "domain": "error" }
        }
    })
}

fn write_operator_json<W: Write>(out: &mut W) -> io::Result<()> {
    let text = serde_json::to_string_pretty(&operator_json()).map_err(io::Error::other)?;
    writeln!(out, "{text}")
}
