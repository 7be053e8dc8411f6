// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod presentation;

use crate::config::Config;
use crate::error::Result;
use dnsmasq_domains_engine::options::OutputFormat;
use log::debug;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run one conversion and print its outcome in the configured format.
///
/// # Errors
///
/// Returns the engine error when the conversion itself fails. Preview
/// failures are printed and ignored.
pub fn run(config: &Config) -> Result<()> {
    debug!("running with {config:?}");

    match config.format {
        OutputFormat::Json => {
            let report = dnsmasq_domains_engine::convert(config)?;
            presentation::print_json(&report)?;
        }
        OutputFormat::Text => {
            presentation::print_banner(config);
            let report = dnsmasq_domains_engine::convert(config)?;
            presentation::print_report(&report, config);
            presentation::print_preview(config);
        }
    }

    Ok(())
}
