pub mod common;
pub mod config;
pub mod feed;
pub mod hypothesis;
pub mod result;
pub mod session;
pub mod topics;

pub use common::{Guidance, StatusBadge, StatusLevel};
pub use config::{ConfigInitViewModel, ConfigViewModel};
pub use feed::{FeedCardViewModel, FeedPageViewModel};
pub use hypothesis::{
    AnalysisRowViewModel, AnalysisViewModel, DeleteResultViewModel, HypothesisDetailViewModel,
    HypothesisListViewModel, HypothesisSummaryViewModel, SaveResultViewModel, UploadViewModel,
};
pub use result::{CommandResultViewModel, CreateView};
pub use session::{GuidanceViewModel, LogoutViewModel, SessionViewModel, WhoamiViewModel};
pub use topics::{
    FilterViewModel, PageViewModel, SortViewModel, TileViewModel, TopicCountsViewModel,
    TopicRowViewModel, TopicsPageViewModel,
};
