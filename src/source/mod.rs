//! Candidate record sources.

pub mod csv_source;

pub use csv_source::{read_candidates, read_candidates_from};
