//! LRU Store - line-oriented driver
//!
//! Reads commands from stdin and applies them to a single in-memory store.
//! See `lru_store::shell` for the command syntax.

use std::io;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lru_store::{shell, Config, DynamicStore};

fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var.
    // Logs go to stderr so replies on stdout stay clean.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lru_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!("Configuration loaded: capacity={}", config.capacity);

    let mut store = DynamicStore::from_config(&config).context("failed to create store")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(&mut store, stdin.lock(), stdout.lock())?;

    info!("Input closed, {} entries held at exit", store.len());
    Ok(())
}
