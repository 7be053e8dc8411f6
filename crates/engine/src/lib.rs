// crates/engine/src/lib.rs
pub mod config;
pub mod directive;
pub mod error;
pub mod options;
pub mod preview;
pub mod processor;
pub mod stats;
pub mod writer;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::stats::ConversionReport;

/// Convert the dnsmasq file at `config.input_path` into a domain list at
/// `config.output_path`.
///
/// Malformed lines do not fail the run; they are returned in
/// `ConversionReport::malformed` unless `config.strict` is set.
///
/// # Errors
///
/// Returns [`EngineError::MissingInput`] when the input does not exist (no
/// output file is created in that case), and a read/write error for any other
/// I/O failure.
pub fn convert(config: &Config) -> Result<ConversionReport> {
    let input = &config.input_path;
    if !input.exists() {
        return Err(EngineError::MissingInput {
            path: input.clone(),
        });
    }

    let extraction = processor::process_file(input, config.strict)?;
    let output_bytes = writer::write_domains(&config.output_path, &extraction.domains)?;

    Ok(ConversionReport::new(
        input.clone(),
        config.output_path.clone(),
        extraction,
        output_bytes,
    ))
}
