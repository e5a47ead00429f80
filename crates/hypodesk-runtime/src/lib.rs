pub mod client;
pub mod config;
pub mod content;
mod desk;
pub mod error;
pub mod guard;
pub mod services;
pub mod session;

pub use client::{AuthApi, HttpClient, HypothesisApi};
pub use config::{ApiConfig, Config, FeedConfig, TableConfig, resolve_workspace_path};
pub use desk::HypoDesk;
pub use error::{Error, Result};
pub use guard::{InFlight, SubmitGuard};
pub use services::{
    DashboardOps, HypothesisForm, HypothesisWorkspace, SaveReport, SelectedFile, UploadOutcome,
    records_to_topics,
};
pub use session::{LoginFlow, LoginStep, SessionContext};
