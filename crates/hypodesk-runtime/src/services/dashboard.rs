use crate::Result;
use crate::client::HypothesisApi;
use crate::config::Config;
use crate::content;
use hypodesk_engine::{ActivityFeed, TopicsTable};
use hypodesk_types::Topic;
use hypodesk_types::wire::HypothesisRecord;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Convert backend rows. Every record becomes a topic; rows without a usable
/// date sort last and rows with an unknown status are only listed, not counted.
pub fn records_to_topics(records: &[HypothesisRecord]) -> Vec<Topic> {
    records
        .iter()
        .map(|record| {
            let topic = record.to_topic();
            if topic.updated_at.is_none() {
                tracing::warn!(
                    id = %record.hypothesis_id,
                    raw = ?record.hypothesis_last_updtd_dt,
                    "topic has no usable date"
                );
            }
            if topic.status.tracked().is_none() {
                tracing::debug!(
                    id = %record.hypothesis_id,
                    status = %topic.status,
                    "untracked status"
                );
            }
            topic
        })
        .collect()
}

/// Data behind the dashboard screen.
#[derive(Clone)]
pub struct DashboardOps {
    api: Arc<dyn HypothesisApi>,
    config: Arc<Config>,
}

impl DashboardOps {
    pub fn new(api: Arc<dyn HypothesisApi>, config: Arc<Config>) -> Self {
        Self { api, config }
    }

    pub fn load_topics(&self) -> Result<Vec<Topic>> {
        let records = self.api.list_topics()?;
        let topics = records_to_topics(&records);
        tracing::debug!(loaded = topics.len(), "topics loaded");
        Ok(topics)
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.config.page_size()
    }

    /// A fresh table over the current topics.
    pub fn table(&self) -> Result<TopicsTable> {
        Ok(TopicsTable::new(self.load_topics()?, self.page_size()))
    }

    pub fn feed(&self) -> Result<ActivityFeed> {
        let items = content::load_feed(self.config.feed.source.as_deref())?;
        Ok(ActivityFeed::new(items, self.config.feed.layout))
    }
}
