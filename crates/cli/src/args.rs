use std::path::PathBuf;

use clap::{Parser, ValueHint};
use dnsmasq_domains_engine::config::{DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_PREVIEW_LINES};

use crate::options::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "dnsmasq_domains",
    version = crate::VERSION,
    about = "Convert dnsmasq `server=/<domain>/<resolver>` lines into a plain domain list"
)]
pub struct Args {
    /// dnsmasq configuration to read
    #[arg(short, long, default_value = DEFAULT_INPUT, value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Domain list to write (overwritten if it exists)
    #[arg(short, long, default_value = DEFAULT_OUTPUT, value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Number of output lines shown after a successful run (0 disables the preview)
    #[arg(long, default_value_t = DEFAULT_PREVIEW_LINES)]
    pub preview: usize,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Fail on the first line that is not a server directive
    #[arg(long)]
    pub strict: bool,

    /// Do not print a warning for every skipped line
    #[arg(short, long)]
    pub quiet: bool,
}
