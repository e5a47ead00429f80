use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Opaque record identifier issued by the backend.
///
/// The backend is not consistent about sending ids as numbers or strings,
/// so both are accepted and normalized to a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Client-side id for a record that has not been persisted yet
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u64> for RecordId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
            Float(f64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => RecordId(s),
            Raw::Int(n) => RecordId(n.to_string()),
            Raw::Float(n) => RecordId(n.to_string()),
        })
    }
}

/// Lifecycle status of a tracked topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TopicStatus {
    Draft,
    Submitted,
    Reviewed,
    Approved,
}

impl TopicStatus {
    /// Every concrete status, in tile order. The synthetic "All" filter
    /// option is not a status and never appears here.
    pub const ALL: [TopicStatus; 4] = [
        TopicStatus::Draft,
        TopicStatus::Submitted,
        TopicStatus::Reviewed,
        TopicStatus::Approved,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TopicStatus::Draft => "Draft",
            TopicStatus::Submitted => "Submitted",
            TopicStatus::Reviewed => "Reviewed",
            TopicStatus::Approved => "Approved",
        }
    }

    /// Identifier used by the status tiles (`draft`, `submitted`, ...)
    pub fn tile_id(self) -> &'static str {
        match self {
            TopicStatus::Draft => "draft",
            TopicStatus::Submitted => "submitted",
            TopicStatus::Reviewed => "reviewed",
            TopicStatus::Approved => "approved",
        }
    }
}

impl fmt::Display for TopicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TopicStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        TopicStatus::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::UnknownStatus(s.to_string()))
    }
}

/// Status as carried by a topic row.
///
/// Labels outside the tracked set are kept verbatim so the row still shows;
/// they never count toward a status tile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowStatus {
    Tracked(TopicStatus),
    Other(String),
}

impl RowStatus {
    /// Read a backend status. A missing or blank status means Draft.
    pub fn from_backend(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => RowStatus::Tracked(TopicStatus::Draft),
            Some(label) => label
                .parse::<TopicStatus>()
                .map_or_else(|_| RowStatus::Other(label.to_string()), RowStatus::Tracked),
        }
    }

    pub fn tracked(&self) -> Option<TopicStatus> {
        match self {
            RowStatus::Tracked(status) => Some(*status),
            RowStatus::Other(_) => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            RowStatus::Tracked(status) => status.label(),
            RowStatus::Other(label) => label,
        }
    }
}

impl From<TopicStatus> for RowStatus {
    fn from(status: TopicStatus) -> Self {
        RowStatus::Tracked(status)
    }
}

impl PartialEq<TopicStatus> for RowStatus {
    fn eq(&self, other: &TopicStatus) -> bool {
        self.tracked() == Some(*other)
    }
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A tracked reimbursement-policy topic as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: RecordId,
    pub name: String,
    pub summary: String,
    pub status: RowStatus,
    /// `None` when the backend sent no usable date
    pub updated_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_case_insensitively() {
        assert_eq!("draft".parse::<TopicStatus>(), Ok(TopicStatus::Draft));
        assert_eq!(" APPROVED ".parse::<TopicStatus>(), Ok(TopicStatus::Approved));
        assert!("All".parse::<TopicStatus>().is_err());
    }

    #[test]
    fn test_row_status_keeps_unknown_labels() {
        assert_eq!(RowStatus::from_backend(None), TopicStatus::Draft);
        assert_eq!(RowStatus::from_backend(Some("  ")), TopicStatus::Draft);
        assert_eq!(RowStatus::from_backend(Some("approved")), TopicStatus::Approved);

        let other = RowStatus::from_backend(Some(" On Hold "));
        assert_eq!(other, RowStatus::Other("On Hold".to_string()));
        assert_eq!(other.tracked(), None);
        assert_eq!(other.label(), "On Hold");
    }

    #[test]
    fn test_row_status_serializes_as_its_label() {
        let json = serde_json::to_string(&[
            RowStatus::from(TopicStatus::Reviewed),
            RowStatus::Other("On Hold".to_string()),
        ])
        .unwrap();
        assert_eq!(json, r#"["Reviewed","On Hold"]"#);

        let back: Vec<RowStatus> = serde_json::from_str(&json).unwrap();
        assert_eq!(back[0], TopicStatus::Reviewed);
        assert_eq!(back[1].label(), "On Hold");
    }

    #[test]
    fn test_record_id_accepts_numbers_and_strings() {
        let from_int: RecordId = serde_json::from_str("42").unwrap();
        let from_str: RecordId = serde_json::from_str("\"h-42\"").unwrap();

        assert_eq!(from_int.as_str(), "42");
        assert_eq!(from_str.as_str(), "h-42");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(RecordId::generate(), RecordId::generate());
    }
}
