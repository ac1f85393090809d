//! Logging setup

use tracing_subscriber::EnvFilter;

/// Env var holding a tracing filter directive, e.g. `session_core=debug`
pub const LOG_ENV: &str = "SESSIONS_LOG";

/// Pick the filter from the process environment
pub fn build_filter(verbose: bool, config_level: &str) -> EnvFilter {
    let env_value = std::env::var(LOG_ENV).ok();
    filter_from(env_value.as_deref(), verbose, config_level)
}

/// SESSIONS_LOG wins when it parses, then --verbose, then the config level
fn filter_from(env_value: Option<&str>, verbose: bool, config_level: &str) -> EnvFilter {
    if let Some(filter) = env_value.and_then(|v| EnvFilter::try_new(v).ok()) {
        return filter;
    }
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_new(config_level).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Logs go to stderr so stdout stays
/// parseable.
pub fn init_logging(verbose: bool, config_level: &str) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose, config_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {}", e);
    }
}
