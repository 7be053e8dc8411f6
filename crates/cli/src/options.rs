use clap::ValueEnum;

/// Report format selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable progress, summary and preview
    #[default]
    Text,
    /// Machine-readable report on stdout
    Json,
}
