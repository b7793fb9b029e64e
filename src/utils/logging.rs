//! Logging setup and configuration

use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LOG_DIR;

pub struct LoggingGuard {
    pub _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Console output plus an hourly rolling file; `json_file` switches the file
/// layer from compact text to JSON lines.
pub fn setup_logging(json_file: bool) -> Result<Arc<LoggingGuard>> {
    let file_appender = tracing_appender::rolling::hourly(LOG_DIR, "address-book.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Only one of the two file layers is ever present.
    let (compact_layer, json_layer) = if json_file {
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_target(true)
            .with_ansi(false)
            .json();
        (None, Some(layer))
    } else {
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_target(true)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(false)
            .compact();
        (Some(layer), None)
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_ansi(true)
                .with_level(true)
        )
        .with(compact_layer)
        .with(json_layer)
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("info".parse()?)
        )
        .init();

    Ok(Arc::new(LoggingGuard { _guard: guard }))
}

pub fn setup_output_directories(export_dir: &std::path::Path) -> Result<()> {
    use std::fs;

    fs::create_dir_all(LOG_DIR)?;
    fs::create_dir_all(export_dir)?;

    Ok(())
}
