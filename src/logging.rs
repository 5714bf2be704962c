use tracing_subscriber::EnvFilter;

/// Env var holding the tracing filter directive (e.g. `keycodes=debug`).
pub const ENV_LOG_FILTER: &str = "KEYCODES_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber used by the binaries.
///
/// `verbose` raises the default level to `debug` when no filter is set.
/// Calling this twice is harmless; the second install is ignored.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { DEFAULT_FILTER };
    let filter =
        EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
