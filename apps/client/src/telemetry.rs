use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::ClientError;

/// Directives used when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_FILTER: &str = "info,solitaire_client=info,reqwest=warn,hyper=warn,hyper_util=warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the JSON subscriber for the CLI.
///
/// Fails with a config error if a global subscriber is already set.
pub fn init_tracing() -> Result<(), ClientError> {
    let json = fmt::layer()
        .json()
        .with_target(true)
        .with_current_span(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(json)
        .try_init()
        .map_err(|e| ClientError::config(format!("tracing already initialised: {e}")))
}
