mod dashboard;
mod workspace;

pub use dashboard::{DashboardOps, records_to_topics};
pub use workspace::{
    HypothesisForm, HypothesisWorkspace, SaveReport, SelectedFile, UploadOutcome,
};
