use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Defaults to `info`; `verbose`
/// raises it to `debug` so the store's no-op paths become visible. `RUST_LOG`
/// overrides either default. Safe to call more than once; later calls are
/// ignored.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
