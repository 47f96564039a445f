use std::env;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "activity_signup=debug,tower_http=debug,warn";

/// Installs the global subscriber. `RUST_LOG` overrides the filter and
/// `LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let json = env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = fmt::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_line_number(true)
        .with_file(true);

    if json {
        builder.json().try_init()
    } else {
        builder.with_ansi(true).try_init()
    }
}
