use tracing_subscriber::{fmt, EnvFilter};

/// Initialize diagnostics logging to stderr
///
/// - Uses `RUST_LOG` for filtering when set
/// - Otherwise defaults to "info", or "debug" when `verbose` is requested
///
/// Stdout is left to the summary tables so it can be piped.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
