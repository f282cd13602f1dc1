use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber for a host application.
///
/// Call once at startup; later calls are ignored so embedding tests can
/// initialize logging repeatedly.
pub fn init_tracing(log_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .compact()
        .try_init();
}
