use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Pick the filter directives: `RUST_LOG` wins, then `--verbose`/`--quiet`,
/// then the configured level.
fn directives(config: &LoggingConfig, verbose: bool, quiet: bool) -> String {
    if let Some(env) = std::env::var("RUST_LOG")
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
    {
        return env;
    }
    if verbose {
        "debug".to_string()
    } else if quiet {
        "error".to_string()
    } else {
        config.level.trim().to_string()
    }
}

fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives)
        .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::WARN.into()))
}

/// Install the global stderr subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init(config: &LoggingConfig, verbose: bool, quiet: bool) {
    let filter = env_filter(&directives(config, verbose, quiet));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
