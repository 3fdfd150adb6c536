//! Run timing and memory reporting.

use std::time::Duration;

use memory_stats::memory_stats;
use tracing::info;

/// Render `elapsed` as `H:MM:SS[.ffffff]`, prefixed by `N day(s), ` past 24h.
///
/// Sub-second digits appear only when the duration has a non-zero
/// microsecond part, and are truncated to `digits` (`None` keeps all six,
/// `Some(0)` drops them along with the dot).
pub fn format_elapsed(elapsed: Duration, digits: Option<usize>) -> String {
    let total_us = elapsed.as_micros();
    let micros = (total_us % 1_000_000) as u32;
    let secs = (total_us / 1_000_000) as u64;

    let days = secs / 86_400;
    let (h, m, s) = ((secs % 86_400) / 3600, (secs % 3600) / 60, secs % 60);

    let mut out = match days {
        0 => String::new(),
        1 => "1 day, ".to_owned(),
        n => format!("{n} days, "),
    };
    out.push_str(&format!("{h}:{m:02}:{s:02}"));

    if micros != 0 {
        let frac = format!("{micros:06}");
        let keep = digits.unwrap_or(6).min(6);
        if keep > 0 {
            out.push('.');
            out.push_str(&frac[..keep]);
        }
    }
    out
}

/// Current resident set size in MiB, or `None` where the platform does not
/// report it.
pub fn resident_mib() -> Option<f64> {
    memory_stats().map(|s| s.physical_mem as f64 / (1024.0 * 1024.0))
}

/// Log the resident set size at the time of the call: the process's current
/// footprint, not its high-water mark.
pub fn log_memory() {
    match resident_mib() {
        Some(mib) => info!("Memory used: {mib:.2} MiB"),
        None      => info!("Memory used: unavailable"),
    }
}
