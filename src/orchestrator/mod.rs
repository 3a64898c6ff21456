//! Orchestrator module: batch workflow coordination.
//!
//! Wires candidate import, parallel matching, result export and summary
//! reporting for one batch run.

pub mod summary;

use anyhow::{Context, Result};
use log::{info, warn};
use std::time::Instant;

use crate::config::AppConfig;
use crate::export::csv_export::{export_summary_csv, export_to_csv};
use crate::matching::match_all;
use crate::normalize::UNKNOWN;
use crate::source::read_candidates;
use summary::BatchSummary;

/// Size the global rayon pool when an explicit thread count is configured.
pub fn configure_threads(threads: Option<usize>) {
    let Some(n) = threads else {
        return;
    };
    match rayon::ThreadPoolBuilder::new().num_threads(n).build_global() {
        Ok(()) => info!("Using {} matching threads", n),
        Err(e) => warn!("Could not size rayon pool to {} threads: {}", n, e),
    }
}

/// Run a full batch: read, match, export and summarise.
pub fn run_batch(cfg: &AppConfig) -> Result<BatchSummary> {
    cfg.validate().context("Invalid batch configuration")?;
    configure_threads(cfg.batch.threads);

    let mut summary = BatchSummary::new(&cfg.batch.input_path);

    let t_read = Instant::now();
    let candidates = read_candidates(&cfg.batch.input_path, &cfg.columns)
        .with_context(|| format!("Failed to read candidates from {}", cfg.batch.input_path))?;
    summary.read_time = t_read.elapsed();
    if candidates.is_empty() {
        warn!("{} contains no candidate rows", cfg.batch.input_path);
    }

    let t_match = Instant::now();
    let outcomes = match_all(&candidates);
    summary.match_time = t_match.elapsed();
    for o in &outcomes {
        summary.record(o.matched, o.handle == UNKNOWN);
    }
    info!(
        "Matched {}/{} rows ({} without a usable handle) in {:?}",
        summary.matched, summary.total, summary.unknown_handle, summary.match_time
    );

    let t_export = Instant::now();
    export_to_csv(&outcomes, &cfg.batch.out_path)
        .with_context(|| format!("Failed to write results to {}", cfg.batch.out_path))?;
    summary.export_time = t_export.elapsed();
    summary.ended_utc = chrono::Utc::now();

    if let Some(ref path) = cfg.batch.summary_path {
        export_summary_csv(path, &summary)
            .with_context(|| format!("Failed to write summary to {}", path))?;
        info!("Wrote summary to {}", path);
    }
    info!(
        "Batch finished in {:.3}s; results in {}",
        summary.duration_secs(),
        cfg.batch.out_path
    );
    Ok(summary)
}
