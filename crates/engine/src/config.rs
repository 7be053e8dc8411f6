use crate::options::OutputFormat;
use derive_builder::Builder;
use std::path::PathBuf;

/// dnsmasq configuration read when no input path is given.
pub const DEFAULT_INPUT: &str = "accelerated-domains.china.conf";
/// Domain list written when no output path is given.
pub const DEFAULT_OUTPUT: &str = "accelerated-domains.china.txt";
/// Number of output lines echoed back after a successful run.
pub const DEFAULT_PREVIEW_LINES: usize = 10;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default = "PathBuf::from(DEFAULT_INPUT)")]
    pub input_path: PathBuf,
    #[builder(default = "PathBuf::from(DEFAULT_OUTPUT)")]
    pub output_path: PathBuf,

    // Read by the binary only; `convert` ignores them.
    /// Output lines echoed after a successful run, `0` for none.
    #[builder(default = "DEFAULT_PREVIEW_LINES")]
    pub preview_lines: usize,
    #[builder(default)]
    pub format: OutputFormat,
    /// Suppress per-line warnings in text output.
    #[builder(default)]
    pub quiet: bool,

    /// Abort on the first malformed line instead of skipping it.
    #[builder(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            preview_lines: DEFAULT_PREVIEW_LINES,
            format: OutputFormat::Text,
            quiet: false,
            strict: false,
        }
    }
}
