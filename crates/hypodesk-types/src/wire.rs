//! Payloads exchanged with the external topic/hypothesis and identity services.
//!
//! Field names follow the backend's column naming, not ours; conversions into
//! domain types live here so nothing else has to know about them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    Hypothesis, LineOfBusiness, Market, RecordId, RowStatus, Topic, parse_backend_date,
    parse_backend_timestamp,
};

/// Envelope returned by the list-topics endpoint.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TopicListResponse {
    #[serde(default)]
    pub data: Vec<HypothesisRecord>,
}

/// A hypothesis row as stored by the backend.
///
/// The list endpoint uses the abbreviated column names while the upsert
/// endpoint echoes the request names; both are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HypothesisRecord {
    pub hypothesis_id: RecordId,
    #[serde(default, alias = "hypothesis_name")]
    pub hypothesis_nm: String,
    #[serde(default, alias = "details")]
    pub hypothesis_smry_txt: Option<String>,
    #[serde(default, alias = "rationale")]
    pub hypothesis_rtnle_smry_txt: Option<String>,
    #[serde(default)]
    pub hypothesis_last_updtd_dt: Option<String>,
    #[serde(default, alias = "status")]
    pub hypothesis_status: Option<String>,
    #[serde(default)]
    pub lobs: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub market: Option<String>,
}

impl HypothesisRecord {
    /// Convert to a dashboard topic. Every record becomes a row: a missing
    /// status means Draft, an unrecognized one is kept as its label, and a
    /// missing or unreadable date leaves `updated_at` empty.
    pub fn to_topic(&self) -> Topic {
        Topic {
            id: self.hypothesis_id.clone(),
            name: self.hypothesis_nm.clone(),
            summary: self.hypothesis_smry_txt.clone().unwrap_or_default(),
            status: RowStatus::from_backend(self.hypothesis_status.as_deref()),
            updated_at: self
                .hypothesis_last_updtd_dt
                .as_deref()
                .and_then(|raw| parse_backend_timestamp(raw).ok()),
        }
    }

    /// Convert to an editable hypothesis. Unknown LOB or market labels are
    /// dropped rather than failing the whole record.
    pub fn to_hypothesis(&self) -> Hypothesis {
        Hypothesis {
            id: self.hypothesis_id.clone(),
            name: self.hypothesis_nm.clone(),
            details: self.hypothesis_smry_txt.clone().unwrap_or_default(),
            rationale: self.hypothesis_rtnle_smry_txt.clone().unwrap_or_default(),
            last_edit: self
                .hypothesis_last_updtd_dt
                .as_deref()
                .and_then(|raw| parse_backend_date(raw).ok()),
            lobs: self
                .lobs
                .iter()
                .filter_map(|raw| raw.parse::<LineOfBusiness>().ok())
                .collect(),
            category: self.category.clone().unwrap_or_default(),
            market: self
                .market
                .as_deref()
                .and_then(|raw| raw.parse::<Market>().ok()),
        }
    }
}

/// Body of the create/update hypothesis call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertRequest {
    pub hypothesis_name: String,
    pub details: String,
    pub rationale: String,
    pub user_domn_id: String,
}

/// Body of the "save for now" topic update call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveTopicRequest {
    pub hypothesis_name: String,
    pub details: String,
    pub rationale: String,
}

/// Whether an upsert created a new hypothesis or changed an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpsertAction {
    Updated,
    #[serde(other)]
    Inserted,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UpsertResponse {
    pub hypothesis_id: RecordId,
    pub action: UpsertAction,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<HypothesisRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GetHypothesisResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<HypothesisRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of the identity service's user lookup (step one of sign-in).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLookupResponse {
    pub user_exists: bool,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub available_roles: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub user_id: String,
    pub aplctn_cd: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body the backend may attach to a non-2xx response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Human-readable message: `detail` first, then `message`.
    pub fn summary(&self) -> Option<String> {
        match &self.detail {
            Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
            Some(Value::Null) | None => {}
            Some(other) => return Some(other.to_string()),
        }
        self.message.clone().filter(|m| !m.is_empty())
    }
}
