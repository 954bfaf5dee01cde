/// Per-run counters and count formatting.
use std::time::Duration;

/// Totals for a completed run.
///
/// `listed` is only non-zero in list mode; `formatted`, `skipped` and
/// `failed` only in format mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files that passed the extension filter.
    pub collected: u64,
    /// Files printed in list mode.
    pub listed: u64,
    /// Files the formatter accepted (exit status success).
    pub formatted: u64,
    /// Files left alone because they matched an exclusion fragment.
    pub skipped: u64,
    /// Files where the formatter could not run or exited non-zero.
    pub failed: u64,
    /// Directories that could not be read during collection.
    pub unreadable: u64,
    pub duration: Duration,
}

impl RunSummary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Format a file count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
