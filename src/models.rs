use serde::{Deserialize, Serialize};

/// One record to verify: an email address and the name it should encode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Result of matching one [`Candidate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub id: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Collapsed handle the decision was made on, or `UNKNOWN`.
    pub handle: String,
    pub matched: bool,
}

// Column mapping for input files; maps source header names to candidate fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub id: Option<String>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            id: Some("id".into()),
            email: "email".into(),
            first_name: "first_name".into(),
            last_name: "last_name".into(),
        }
    }
}

impl ColumnMapping {
    pub fn required_ok(&self) -> bool {
        !self.email.trim().is_empty()
            && !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
    }

    /// Email, first and last name must come from different columns.
    /// Headers are resolved case-insensitively, so names are compared the same way.
    pub fn distinct_ok(&self) -> bool {
        !self.email.eq_ignore_ascii_case(&self.first_name)
            && !self.email.eq_ignore_ascii_case(&self.last_name)
            && !self.first_name.eq_ignore_ascii_case(&self.last_name)
    }
}
