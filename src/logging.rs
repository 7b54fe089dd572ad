use anyhow::{Context, Result};
use camino::Utf8Path;
use std::fs;
use tracing::Subscriber;
use tracing_appender::rolling;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the level filter. `RUST_LOG` wins when set.
fn env_filter(debug_mode: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug_mode {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    })
}

/// Console output layer, generic over whatever it is stacked on
fn console_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer()
        .with_ansi(true)
        .with_target(false)
}

/// Setup console logging, optionally mirrored to a daily rotating file.
///
/// # Arguments
/// * `log_dir` - Directory for log files; `None` logs to the console only
/// * `log_prefix` - Prefix for log files (e.g., "templatemaker")
/// * `debug_mode` - If true, use debug level; otherwise use info level
///
/// # Returns
/// When file logging is enabled, a guard that must be held for the duration
/// of the program to keep the file writer alive
pub fn setup_logging(
    log_dir: Option<&Utf8Path>,
    log_prefix: &str,
    debug_mode: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(log_dir) = log_dir else {
        tracing_subscriber::registry()
            .with(env_filter(debug_mode))
            .with(console_layer())
            .try_init()
            .context("Failed to install log subscriber")?;
        return Ok(None);
    };

    if !log_dir.exists() {
        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir))?;
    }

    let file_appender = rolling::daily(log_dir, log_prefix);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI codes in log files
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter(debug_mode))
        .with(file_layer)
        .with(console_layer())
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!(
        "Logging initialized: dir={}, prefix={}, debug={}",
        log_dir,
        log_prefix,
        debug_mode
    );

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_setup_logging_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = Utf8PathBuf::try_from(temp_dir.path().join("logs")).unwrap();

        // Installing the subscriber can fail if another test already did,
        // but the directory is created before that point
        let result = setup_logging(Some(&log_dir), "test", false);

        assert!(log_dir.exists());
        if let Ok(guard) = result {
            assert!(guard.is_some());
        }
    }

    #[test]
    fn test_console_only_logging_has_no_guard() {
        match setup_logging(None, "test", true) {
            Ok(guard) => assert!(guard.is_none()),
            Err(e) => assert!(e.to_string().contains("Failed to install log subscriber")),
        }
    }
}
