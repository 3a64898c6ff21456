use csv::{ReaderBuilder, StringRecord, Trim};
use log::{info, warn};
use std::fs::File;
use std::io::{BufReader, Read};

use crate::error::BatchError;
use crate::models::{Candidate, ColumnMapping};

/// Header positions resolved from a [`ColumnMapping`].
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    id: Option<usize>,
    email: usize,
    first_name: usize,
    last_name: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, mapping: &ColumnMapping) -> Result<Self, BatchError> {
        let find = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
        let required = |name: &str| {
            find(name).ok_or_else(|| BatchError::MissingColumn {
                column: name.to_string(),
            })
        };
        let id = match mapping.id.as_deref() {
            Some(col) => {
                let idx = find(col);
                if idx.is_none() {
                    warn!("id column '{}' not present; rows will carry no id", col);
                }
                idx
            }
            None => None,
        };
        Ok(Self {
            id,
            email: required(&mapping.email)?,
            first_name: required(&mapping.first_name)?,
            last_name: required(&mapping.last_name)?,
        })
    }
}

fn cell(record: &StringRecord, idx: usize) -> Option<String> {
    record
        .get(idx)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Read candidates from a headered CSV file.
pub fn read_candidates(path: &str, mapping: &ColumnMapping) -> Result<Vec<Candidate>, BatchError> {
    let file = File::open(path)?;
    let rows = read_candidates_from(BufReader::with_capacity(512 * 1024, file), mapping)?;
    info!("Loaded {} candidate rows from {}", rows.len(), path);
    Ok(rows)
}

/// Read candidates from any CSV reader. Empty cells become `None`; short rows
/// are tolerated and their missing fields are `None` as well.
pub fn read_candidates_from<R: Read>(
    reader: R,
    mapping: &ColumnMapping,
) -> Result<Vec<Candidate>, BatchError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);
    let cols = ColumnIndex::resolve(rdr.headers()?, mapping)?;

    let mut out = Vec::new();
    for record in rdr.records() {
        let record = record?;
        out.push(Candidate {
            id: cols.id.and_then(|i| cell(&record, i)),
            email: cell(&record, cols.email),
            first_name: cell(&record, cols.first_name),
            last_name: cell(&record, cols.last_name),
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_mapped_columns() {
        let data = "id,email,first_name,last_name\n1,johnsmith@email.com,john,smith\n2,,maria,kallas\n";
        let rows = read_candidates_from(data.as_bytes(), &ColumnMapping::default()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id.as_deref(), Some("1"));
        assert_eq!(rows[0].email.as_deref(), Some("johnsmith@email.com"));
        assert_eq!(rows[1].email, None);
        assert_eq!(rows[1].last_name.as_deref(), Some("kallas"));
    }

    #[test]
    fn custom_mapping_is_case_insensitive() {
        let data = "Mail, Given ,Family\nx@y.z,Ann,Lee\n";
        let mapping = ColumnMapping {
            id: None,
            email: "mail".into(),
            first_name: "given".into(),
            last_name: "family".into(),
        };
        let rows = read_candidates_from(data.as_bytes(), &mapping).unwrap();
        assert_eq!(rows[0].first_name.as_deref(), Some("Ann"));
        assert_eq!(rows[0].id, None);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let data = "id,email,first_name\n1,a@b,c\n";
        let err = read_candidates_from(data.as_bytes(), &ColumnMapping::default()).unwrap_err();
        match err {
            BatchError::MissingColumn { column } => assert_eq!(column, "last_name"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn short_rows_yield_none() {
        let data = "email,first_name,last_name\njs@email.com,john\n";
        let rows = read_candidates_from(data.as_bytes(), &ColumnMapping::default()).unwrap();
        assert_eq!(rows[0].first_name.as_deref(), Some("john"));
        assert_eq!(rows[0].last_name, None);
        // id column absent from header
        assert_eq!(rows[0].id, None);
    }
}
