use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// Filter comes from `RUST_LOG` (default `info`); `PHOTOSEL_LOG_FORMAT=json`
/// switches to JSON lines.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("PHOTOSEL_LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    // Already initialised (e.g. by a test harness) is not an error
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
}
