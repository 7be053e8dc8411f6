// crates/cli/src/presentation.rs
use crate::config::Config;
use crate::error::{AppError, Result};
use dnsmasq_domains_engine::preview::preview;
use dnsmasq_domains_engine::stats::{ConversionReport, MalformedLine};

const RULE_WIDTH: usize = 50;

fn print_rule() {
    println!("{}", "-".repeat(RULE_WIDTH));
}

pub fn print_banner(config: &Config) {
    println!("Converting dnsmasq server directives to a domain list...");
    println!(
        "From {} to {}",
        config.input_path.display(),
        config.output_path.display()
    );
    print_rule();
}

pub fn print_warning(line: &MalformedLine) {
    println!(
        "Warning: line {} does not match the server directive pattern: {}",
        line.line_number, line.content
    );
}

pub fn print_report(report: &ConversionReport, config: &Config) {
    if !config.quiet {
        for line in &report.malformed {
            print_warning(line);
        }
    }

    println!("Conversion finished!");
    println!("- Input file: {}", report.input_path.display());
    println!("- Output file: {}", report.output_path.display());
    println!("- Domains extracted: {}", report.processed);
    println!("- Lines skipped: {}", report.skipped);
    println!("- Output file size: {} bytes", report.output_bytes);

    print_rule();
    println!("Conversion completed successfully!");
}

/// Echo the head of the written list. A read failure is reported here and
/// never turns a successful run into a failed one.
pub fn print_preview(config: &Config) {
    let limit = config.preview_lines;
    if limit == 0 {
        return;
    }

    println!();
    println!("Preview of the first {limit} lines of the output file:");
    match preview(&config.output_path, limit) {
        Ok(lines) => {
            for line in lines {
                println!("  {line}");
            }
        }
        Err(e) => println!("Could not preview the output file: {e}"),
    }
}

pub fn print_json(report: &ConversionReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}

pub fn print_failure(err: &AppError, config: &Config) {
    eprintln!("Error: {err}");
    if matches!(config.format, dnsmasq_domains_engine::options::OutputFormat::Text) {
        println!("Conversion failed!");
    }
}
