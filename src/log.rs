// src/log.rs
//! Subscriber setup for the CLI. The library itself only emits events.

use tracing_subscriber::EnvFilter;

/// stderr logger; `RUST_LOG` wins over the verbosity flag.
pub fn init(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("foss_scrape={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
