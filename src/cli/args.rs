use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

pub const USAGE: &str = "gohash [-a algorithm] [--help] [--version] <file>";

#[derive(Parser, Debug)]
#[command(name = "gohash")]
#[command(about = "Generates file hashes")]
#[command(override_usage = USAGE)]
#[command(help_template = "{usage}\n\n{all-args}")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// File to hash; further arguments are ignored
    #[arg(value_name = "file", num_args = 1.., trailing_var_arg = true)]
    pub files: Vec<PathBuf>,

    /// Hash algorithm: crc32, crc64, adler32, fnv32, fnva32, fnv64, fnva64
    #[arg(short = 'a', value_name = "algorithm", default_value = "crc32")]
    pub algorithm: String,

    /// Display the help page
    #[arg(long, action = ArgAction::SetTrue)]
    pub help: bool,

    /// Show the current version of gohash
    #[arg(long, action = ArgAction::SetTrue)]
    pub version: bool,

    /// Print operator.json and exit
    #[arg(long)]
    pub describe: bool,

    /// Log diagnostics to stderr (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The file to hash. A missing positional yields an empty path, which the
    /// filesystem rejects like any other unreadable path.
    pub fn file(&self) -> &Path {
        self.files.first().map(PathBuf::as_path).unwrap_or(Path::new(""))
    }
}
