use anyhow::Result;
use csv::{Writer, WriterBuilder};
use std::fs::File;
use std::io::BufWriter;

use crate::models::MatchOutcome;
use crate::orchestrator::summary::BatchSummary;

const HEADERS: [&str; 6] = ["ID", "Email", "FirstName", "LastName", "Handle", "Matched"];

pub fn export_to_csv(results: &[MatchOutcome], path: &str) -> Result<()> {
    let file = File::create(path)?;
    let buf_writer = BufWriter::with_capacity(512 * 1024, file);
    let mut w = WriterBuilder::new().from_writer(buf_writer);
    write_outcomes(&mut w, results)?;
    w.flush()?;
    Ok(())
}

pub fn write_outcomes<W: std::io::Write>(w: &mut Writer<W>, results: &[MatchOutcome]) -> Result<()> {
    w.write_record(HEADERS)?;
    for o in results {
        w.write_record([
            o.id.as_deref().unwrap_or(""),
            o.email.as_deref().unwrap_or(""),
            o.first_name.as_deref().unwrap_or(""),
            o.last_name.as_deref().unwrap_or(""),
            o.handle.as_str(),
            if o.matched { "true" } else { "false" },
        ])?;
    }
    Ok(())
}

pub fn export_summary_csv(path: &str, summary: &BatchSummary) -> Result<()> {
    let file = File::create(path)?;
    let mut w = WriterBuilder::new().from_writer(BufWriter::new(file));
    w.write_record(["Key", "Value"])?;

    let mut write_kv = |k: &str, v: String| -> Result<()> {
        w.write_record([k, v.as_str()])?;
        Ok(())
    };

    write_kv("Input", summary.input_path.clone())?;
    write_kv("Total records", summary.total.to_string())?;
    write_kv("Matched", summary.matched.to_string())?;
    write_kv("Not matched", summary.unmatched.to_string())?;
    write_kv("Unknown handle", summary.unknown_handle.to_string())?;
    write_kv("Match rate (%)", format!("{:.2}", summary.match_rate_pct()))?;
    write_kv("Read time (s)", format!("{:.3}", summary.read_time.as_secs_f64()))?;
    write_kv("Match time (s)", format!("{:.3}", summary.match_time.as_secs_f64()))?;
    write_kv("Export time (s)", format!("{:.3}", summary.export_time.as_secs_f64()))?;
    write_kv("Started (UTC)", summary.started_utc.to_rfc3339())?;
    write_kv("Ended (UTC)", summary.ended_utc.to_rfc3339())?;

    w.flush()?;
    Ok(())
}
