pub mod config;
pub mod feed;
pub mod hypothesis;
pub mod session;
pub mod topics;

pub use config::{present_config, present_config_init};
pub use feed::present_feed_page;
pub use hypothesis::{
    present_analysis, present_delete, present_delete_pending, present_hypothesis,
    present_hypothesis_list, present_save,
};
pub use session::{present_guidance, present_login, present_logout, present_whoami};
pub use topics::{present_topic_counts, present_topics_page};
