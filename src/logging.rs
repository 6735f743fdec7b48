use env_logger::Env;

/// Install the `env_logger` backend.
///
/// Logs go to stderr at `warn` (`debug` when verbose) unless `RUST_LOG` says
/// otherwise.
pub fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
