use serde::{Deserialize, Serialize};

use super::TopicStatus;

/// A single status tile: how many topics currently sit in one status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMetric {
    pub id: String,
    pub label: String,
    pub status: TopicStatus,
    pub value: usize,
}

impl StatusMetric {
    pub fn new(status: TopicStatus, value: usize) -> Self {
        Self {
            id: status.tile_id().to_string(),
            label: status.label().to_string(),
            status,
            value,
        }
    }
}
