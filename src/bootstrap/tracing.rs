//! Tracing configuration
//!
//! ## Behavior
//!
//! - **Development**: debug level for the panel crates
//! - **Production**: info level
//! - **RUST_LOG**: overrides the default directives when set
//! - **File output**: optional, non-blocking, under the platform log directory

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use anyhow::Context;
use mc_core::config::LoggingConfig;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

const LOG_FILE_NAME: &str = "molclip.log";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        "info".to_string(),
        format!("molclip_lib={level}"),
        format!("mc_app={level}"),
        format!("mc_platform={level}"),
        // arboard logs every X11 selection request at debug
        "arboard=warn".to_string(),
    ]
}

/// Resolve the log directory: the configured one, else the platform data dir.
fn resolve_log_dir(config: &LoggingConfig) -> anyhow::Result<PathBuf> {
    if let Some(dir) = &config.directory {
        return Ok(dir.clone());
    }
    let base = dirs::data_local_dir().context("no local data directory on this platform")?;
    Ok(base.join("molclip").join("logs"))
}

/// Initialize the global tracing subscriber.
///
/// Call once, before the panel is wired. Stdout is always written; a log file
/// is added when `config.file` is set. A file writer that cannot be created
/// is reported on stderr and logging continues on stdout only.
///
/// # Errors
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(config: &LoggingConfig) -> anyhow::Result<()> {
    let is_dev = is_development();

    let filter_directives = build_filter_directives(is_dev);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let file_writer = if config.file {
        match resolve_log_dir(config).and_then(|dir| build_file_writer(&dir)) {
            Ok(writer) => Some(writer),
            Err(err) => {
                eprintln!("Failed to initialize file logging, falling back to stdout: {err:#}");
                None
            }
        }
    } else {
        None
    };

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(BoxMakeWriter::new(io::stdout));

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(
                "%Y-%m-%d %H:%M:%S%.3f".to_string(),
            ))
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives() {
        let dev_directives = build_filter_directives(true);
        assert!(dev_directives.contains(&"mc_app=debug".to_string()));
        assert!(dev_directives.contains(&"mc_platform=debug".to_string()));
        assert!(dev_directives.contains(&"arboard=warn".to_string()));

        let prod_directives = build_filter_directives(false);
        assert!(prod_directives.contains(&"mc_app=info".to_string()));
        assert!(prod_directives.contains(&"molclip_lib=info".to_string()));
    }

    #[test]
    fn configured_log_dir_wins() {
        let config = LoggingConfig {
            file: true,
            directory: Some(PathBuf::from("/tmp/molclip-logs")),
        };
        assert_eq!(
            resolve_log_dir(&config).unwrap(),
            PathBuf::from("/tmp/molclip-logs")
        );
    }

    #[test]
    fn file_writer_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("logs");

        // The guard can only be set once per process; either outcome still
        // leaves the directory in place.
        let _ = build_file_writer(&nested);

        assert!(nested.is_dir());
    }
}
