//! Logging initialization for the CLI
//!
//! Uses the `RUST_LOG` environment variable when set, otherwise logs the
//! generator crates at `info` (or `debug` with `--verbose`). Output goes to
//! stderr so it never mixes with generated content.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(build_env_filter(level))
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn build_env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("retrogen={},retrogen_codegen={}", level, level))
    })
}
