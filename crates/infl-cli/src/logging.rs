//! Log setup: an `EnvFilter` from `--log-level` and `[LEVEL] message` lines.

use std::fmt;

use anyhow::{Context, Result};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;

/// Formats each event as `[LEVEL] message key=value…` on one line, with no
/// timestamp or target.
pub struct LevelPrefix;

impl<S, N> FormatEvent<S, N> for LevelPrefix
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx:        &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event:      &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "[{}] ", level_name(event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_name(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "TRACE",
        Level::DEBUG => "DEBUG",
        Level::INFO  => "INFO",
        Level::WARN  => "WARNING",
        Level::ERROR => "ERROR",
    }
}

/// Build the log filter for `level`; `None` turns logging off.
pub fn log_filter(level: &str) -> Result<Option<EnvFilter>> {
    let level = level.trim().to_ascii_lowercase();
    if matches!(level.as_str(), "none" | "disable") {
        return Ok(None);
    }
    let filter = EnvFilter::try_new(&level)
        .with_context(|| format!("invalid log level {level:?}"))?;
    Ok(Some(filter))
}

/// The subscriber the binary logs through, writing to `writer`.
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .event_format(LevelPrefix)
        .finish()
}

pub fn init_logging(level: &str) -> Result<()> {
    let Some(filter) = log_filter(level)? else {
        return Ok(());
    };
    tracing::subscriber::set_global_default(subscriber(filter, std::io::stderr))
        .context("installing the global log subscriber")?;
    Ok(())
}
