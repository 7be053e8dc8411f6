use clap::Parser;
use dnsmasq_domains_cli::args::Args;
use dnsmasq_domains_cli::config::Config;
use dnsmasq_domains_cli::{logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    let config = Config::from(args);

    match dnsmasq_domains_cli::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            presentation::print_failure(&e, &config);
            ExitCode::FAILURE
        }
    }
}
