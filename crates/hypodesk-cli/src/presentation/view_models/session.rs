use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SessionViewModel {
    pub user_id: String,
    pub user_name: String,
    pub role: String,
    pub application_code: String,
    pub signed_in_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct WhoamiViewModel {
    pub session: Option<SessionViewModel>,
}

#[derive(Debug, Serialize)]
pub struct LogoutViewModel {
    /// User whose session ended, if one was active
    pub user_id: Option<String>,
}

/// What `hypodesk` with no command prints.
#[derive(Debug, Serialize)]
pub struct GuidanceViewModel {
    pub data_dir: String,
    pub config_exists: bool,
    pub session: Option<SessionViewModel>,
}
