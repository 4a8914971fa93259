//! File logging through tracing.

use std::ffi::OsStr;
use std::path::Path;
use std::str::FromStr;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

pub const DEFAULT_LOG_FILE: &str = "lumapick.log";

/// Directive enabling `level` for this crate only. Unknown levels fall back to info.
pub fn crate_directive(level: &str) -> Directive {
    let level = LevelFilter::from_str(level).unwrap_or(LevelFilter::INFO);
    format!("lumapick={level}")
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into())
}

/// Install the global subscriber writing to `log_path` (default `lumapick.log`).
///
/// `RUST_LOG` directives are layered on top of `level`. The returned guard
/// flushes pending lines when dropped, so `main` holds it until exit. Logs
/// never go to the terminal, which the TUI owns.
///
/// Span enter/close events are only recorded in debug builds.
pub fn init_logging(log_path: Option<&Path>, level: &str) -> WorkerGuard {
    let log_path = log_path.unwrap_or(Path::new(DEFAULT_LOG_FILE));
    let dir = match log_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file = log_path
        .file_name()
        .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE));

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file));

    let filter = EnvFilter::builder()
        .with_default_directive(crate_directive(level))
        .from_env_lossy();

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false);

    #[cfg(debug_assertions)]
    let file_layer = file_layer.with_span_events(fmt::format::FmtSpan::ENTER | fmt::format::FmtSpan::CLOSE);

    // A second install (tests, embedding) keeps the first subscriber
    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("subscriber already installed");
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_scopes_level_to_crate() {
        assert_eq!(crate_directive("debug").to_string(), "lumapick=debug");
        assert_eq!(crate_directive("TRACE").to_string(), "lumapick=trace");
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(crate_directive("chatty").to_string(), "lumapick=info");
    }
}
