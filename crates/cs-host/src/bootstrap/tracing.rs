//! Tracing configuration for ClipShelf
//!
//! Installs the global subscriber: an env-filter, a console layer on stderr
//! and an optional non-blocking file layer under the application's logs
//! directory.
//!
//! ## Output streams
//!
//! - **stderr**: every log line, with ANSI colors outside tests
//! - **stdout**: left free for the rendered document markup
//! - **`<logs_dir>/clipshelf.log`**: the same lines without colors, when
//!   file logging is enabled

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

const LOG_FILE_NAME: &str = "clipshelf.log";
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives, used when `RUST_LOG` is not set.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("cs_app={level}"),
        format!("cs_infra={level}"),
        // per-tick trace output is only wanted on request
        "cs_core=info".to_string(),
    ]
}

/// Initialize the tracing subscriber.
///
/// ## Behavior
///
/// - **Filter**: `RUST_LOG` when set, otherwise `debug` in debug builds and
///   `info` in release builds
/// - **Console**: always on, written to stderr
/// - **File**: on when `logs_dir` is `Some`; the directory is created if
///   missing. If the file writer cannot be set up, logging continues on
///   stderr only
///
/// ## Call this
///
/// Once, before the runtime is created:
///
/// ```no_run
/// use std::path::Path;
///
/// cs_host::bootstrap::tracing::init_tracing_subscriber(Some(Path::new("/tmp/clipshelf/logs")))
///     .expect("Failed to initialize tracing");
/// ```
///
/// ## Errors
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(logs_dir: Option<&Path>) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    // stdout carries the rendered markup in the headless CLI, logs go to stderr
    let console_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = match logs_dir.map(build_file_writer).transpose() {
        Ok(writer) => writer,
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to console: {err}");
            None
        }
    };

    let console_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIME_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(console_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIME_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::never(logs_dir, LOG_FILE_NAME);
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
        assert!(dev_directives.contains(&"debug".to_string()));
        assert!(dev_directives.contains(&"cs_app=debug".to_string()));
        assert!(dev_directives.contains(&"cs_infra=debug".to_string()));

        let prod_directives = build_filter_directives(false);
        assert!(prod_directives.contains(&"info".to_string()));
        assert!(prod_directives.contains(&"cs_app=info".to_string()));
        assert!(prod_directives.contains(&"cs_core=info".to_string()));
    }

    #[test]
    fn test_build_file_writer_creates_logs_dir() {
        let dir = tempfile::tempdir().unwrap();
        let logs_dir = dir.path().join("logs");

        // The guard can only be set once per process; only the directory
        // creation is asserted here.
        let _ = build_file_writer(&logs_dir);

        assert!(logs_dir.is_dir());
    }
}
