//! Run summary for batch matching.

use std::time::Duration;

/// Counters and timings collected over one batch run.
#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub input_path: String,
    pub total: usize,
    pub matched: usize,
    pub unmatched: usize,
    /// Rows whose email produced no usable handle (always counted as unmatched too).
    pub unknown_handle: usize,
    pub read_time: Duration,
    pub match_time: Duration,
    pub export_time: Duration,
    pub started_utc: chrono::DateTime<chrono::Utc>,
    pub ended_utc: chrono::DateTime<chrono::Utc>,
}

impl Default for BatchSummary {
    fn default() -> Self {
        let now = chrono::Utc::now();
        Self {
            input_path: String::new(),
            total: 0,
            matched: 0,
            unmatched: 0,
            unknown_handle: 0,
            read_time: Duration::ZERO,
            match_time: Duration::ZERO,
            export_time: Duration::ZERO,
            started_utc: now,
            ended_utc: now,
        }
    }
}

impl BatchSummary {
    pub fn new(input_path: &str) -> Self {
        Self {
            input_path: input_path.to_string(),
            ..Default::default()
        }
    }

    /// Count one evaluated row.
    pub fn record(&mut self, matched: bool, unknown_handle: bool) {
        self.total += 1;
        if matched {
            self.matched += 1;
        } else {
            self.unmatched += 1;
        }
        if unknown_handle {
            self.unknown_handle += 1;
        }
    }

    pub fn match_rate_pct(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.matched as f64 * 100.0 / self.total as f64
    }

    pub fn duration_secs(&self) -> f64 {
        (self.ended_utc - self.started_utc).num_milliseconds() as f64 / 1000.0
    }
}
