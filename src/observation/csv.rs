//! CSV ingestion
//!
//! Files carry a header line followed by
//! `elapsed_time, ownship_x, ownship_y, measured_bearing` rows.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{Observation, ObservationSet};
use crate::error::LoadError;

const COLUMNS: [&str; 4] = ["elapsed_time", "ownship_x", "ownship_y", "measured_bearing"];

/// What to do with a row that cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordPolicy {
    /// Fail the whole load
    #[default]
    Reject,
    /// Drop the row and log it
    Skip,
}

/// Loader for observation CSV files
#[derive(Debug, Clone, Default)]
pub struct CsvLoader {
    policy: RecordPolicy,
    max_rows: Option<usize>,
}

impl CsvLoader {
    /// Create a loader that rejects malformed rows and keeps every row
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the malformed-row policy
    pub fn policy(mut self, policy: RecordPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Keep at most `max_rows` rows; the rest are dropped with a warning
    pub fn max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    /// Load observations from a file
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened, or on the first
    /// malformed row under [`RecordPolicy::Reject`].
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<ObservationSet, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let set = self.read(file)?;
        info!(path = %path.display(), rows = set.len(), "Loaded observations");
        Ok(set)
    }

    /// Load observations from any reader
    pub fn read<R: Read>(&self, reader: R) -> Result<ObservationSet, LoadError> {
        let mut reader = ::csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(::csv::Trim::All)
            .from_reader(reader);

        let mut observations = Vec::new();
        let mut dropped = 0usize;
        let mut skipped = 0usize;

        for result in reader.records() {
            let record = result?;

            if self.max_rows.is_some_and(|max| observations.len() >= max) {
                dropped += 1;
                continue;
            }

            match parse_record(&record) {
                Ok(observation) => observations.push(observation),
                Err(err) if self.policy == RecordPolicy::Skip && err.is_record_error() => {
                    warn!(error = %err, "Skipping malformed record");
                    skipped += 1;
                }
                Err(err) => return Err(err),
            }
        }

        if dropped > 0 {
            warn!(
                kept = observations.len(),
                dropped, "Row limit reached, dropping remaining rows"
            );
        }
        if skipped > 0 {
            debug!(skipped, "Malformed rows skipped");
        }

        Ok(ObservationSet::from_vec(observations))
    }
}

fn parse_record(record: &::csv::StringRecord) -> Result<Observation, LoadError> {
    let line = record.position().map_or(0, |p| p.line());

    if record.len() != COLUMNS.len() {
        return Err(LoadError::FieldCount {
            line,
            expected: COLUMNS.len(),
            found: record.len(),
        });
    }

    let mut values = [0.0f64; 4];
    for (slot, (field, column)) in values.iter_mut().zip(record.iter().zip(COLUMNS)) {
        *slot = field.parse().map_err(|_| LoadError::MalformedRecord {
            line,
            column,
            value: field.to_string(),
        })?;
    }

    let [elapsed_time, ownship_x, ownship_y, measured_bearing] = values;
    Ok(Observation::new(
        elapsed_time,
        ownship_x,
        ownship_y,
        measured_bearing,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "time,x,y,bearing\n";

    fn load_str(loader: &CsvLoader, body: &str) -> Result<ObservationSet, LoadError> {
        let text = format!("{HEADER}{body}");
        loader.read(text.as_bytes())
    }

    #[test]
    fn test_load_rows() {
        let set = load_str(&CsvLoader::new(), "0,1.5,2.5,0.1\n2, 3.0 ,4.0,0.2\n").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice()[0], Observation::new(0.0, 1.5, 2.5, 0.1));
        assert_eq!(set.as_slice()[1].ownship_x, 3.0);
    }

    #[test]
    fn test_header_only_is_empty() {
        let set = load_str(&CsvLoader::new(), "").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_reject_malformed_value() {
        let err = load_str(&CsvLoader::new(), "0,1,2,0.1\n2,abc,4,0.2\n").unwrap_err();
        match err {
            LoadError::MalformedRecord {
                line,
                column,
                value,
            } => {
                assert_eq!(line, 3);
                assert_eq!(column, "ownship_x");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_reject_wrong_field_count() {
        let err = load_str(&CsvLoader::new(), "0,1,2\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::FieldCount {
                line: 2,
                expected: 4,
                found: 3
            }
        ));
    }

    #[test]
    fn test_skip_malformed() {
        let loader = CsvLoader::new().policy(RecordPolicy::Skip);
        let set = load_str(&loader, "0,1,2,0.1\nbad,row\n4,5,6,x\n6,7,8,0.3\n").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice()[1].measured_bearing, 0.3);
    }

    #[test]
    fn test_max_rows_truncates() {
        let loader = CsvLoader::new().max_rows(2);
        let set = load_str(&loader, "0,0,0,0.1\n1,0,0,0.2\n2,0,0,0.3\n3,0,0,0.4\n").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice()[1].measured_bearing, 0.2);
    }

    #[test]
    fn test_rows_past_limit_are_not_parsed() {
        let loader = CsvLoader::new().max_rows(1);
        let set = load_str(&loader, "0,0,0,0.1\nnot,a,valid,row\n").unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, "{HEADER}").expect("write header");
        writeln!(file, "0,-1000,250,1.2").expect("write row");
        writeln!(file, "2,-990,260,1.19").expect("write row");

        let set = CsvLoader::new().load(file.path()).expect("load CSV");
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice()[0].ownship_x, -1000.0);
    }

    #[test]
    fn test_missing_file() {
        let err = CsvLoader::new()
            .load("/definitely/not/here.csv")
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }
}
