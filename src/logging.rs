use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding an `EnvFilter` directive, e.g. `debug`.
pub const LOG_ENV_VAR: &str = "PROJECT_COMMIT_LOG";

/// `warn` unless `PROJECT_COMMIT_LOG` says otherwise.
pub fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy()
}

/// Logs go to stderr so generated artifacts on stdout stay clean.
pub fn setup_logger() {
    let fmt = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(fmt)
        .with(env_filter())
        .init();
}
