use crate::args::Args;
use crate::options;
pub use dnsmasq_domains_engine::config::Config;
use dnsmasq_domains_engine::options as engine_options;

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            input_path: args.input,
            output_path: args.output,
            preview_lines: args.preview,
            format: args.format.into(),
            quiet: args.quiet,
            strict: args.strict,
        }
    }
}

impl From<options::OutputFormat> for engine_options::OutputFormat {
    fn from(f: options::OutputFormat) -> Self {
        match f {
            options::OutputFormat::Text => Self::Text,
            options::OutputFormat::Json => Self::Json,
        }
    }
}
