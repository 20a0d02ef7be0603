use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for the crate; `verbose` forces debug over the configured level.
pub fn filter_directive(level: &str, verbose: bool) -> String {
    let level = if verbose { "debug" } else { level };
    format!("arcade_interface={}", level)
}

fn env_filter(level: &str, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level, verbose)))
}

// Logs go to stderr; stdout carries only the status report.
// A subscriber may already be set (tests, embedding binaries), hence `try_init`.
pub fn init_cli_logger(level: &str, verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}

pub fn init_json_logger(level: &str, verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .json(),
        )
        .try_init();
}
