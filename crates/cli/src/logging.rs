use env_logger::Env;

/// Install the stderr logger. `RUST_LOG` overrides the default `warn` filter.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}
