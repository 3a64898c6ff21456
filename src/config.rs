use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::ColumnMapping;

/// Upper bound accepted for an explicit rayon pool size.
pub const MAX_THREADS: usize = 512;

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct BatchConfig {
    pub input_path: String,
    pub out_path: String,
    pub summary_path: Option<String>, // key/value CSV written next to the results when set
    pub threads: Option<usize>,       // None = rayon default
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct AppConfig {
    pub batch: BatchConfig,
    #[serde(default)]
    pub columns: ColumnMapping,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch.input_path.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "batch.input_path",
            });
        }
        if self.batch.out_path.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "batch.out_path",
            });
        }
        if self.batch.input_path == self.batch.out_path {
            return Err(ConfigError::InvalidValue {
                field: "batch.out_path",
                reason: "must differ from batch.input_path".into(),
            });
        }
        if let Some(ref summary) = self.batch.summary_path {
            if summary == &self.batch.out_path || summary == &self.batch.input_path {
                return Err(ConfigError::InvalidValue {
                    field: "batch.summary_path",
                    reason: format!("{} collides with the input or output path", summary),
                });
            }
        }
        if let Some(threads) = self.batch.threads {
            if !(1..=MAX_THREADS).contains(&threads) {
                return Err(ConfigError::InvalidValue {
                    field: "batch.threads",
                    reason: format!("{} not in 1..={}", threads, MAX_THREADS),
                });
            }
        }
        if !self.columns.required_ok() {
            return Err(ConfigError::MissingField {
                field: "columns.email|first_name|last_name",
            });
        }
        if let Some(ref id) = self.columns.id {
            if id.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "columns.id",
                    reason: "must not be blank when set".into(),
                });
            }
        }
        if !self.columns.distinct_ok() {
            return Err(ConfigError::InvalidValue {
                field: "columns",
                reason: "email, first_name and last_name must use different columns".into(),
            });
        }
        Ok(())
    }
}
