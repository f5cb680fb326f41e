use env_logger::Env;

/// Routes `log` records to stderr. `RUST_LOG` wins over the default filter.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "hubnotes=debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}
