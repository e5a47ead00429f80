use chrono::NaiveDateTime;
use hypodesk_engine::{SortDirection, TopicColumn};
use hypodesk_types::{RowStatus, TopicStatus};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TopicRowViewModel {
    pub id: String,
    pub name: String,
    pub summary: String,
    pub status: RowStatus,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TileViewModel {
    pub id: String,
    pub label: String,
    pub status: TopicStatus,
    pub value: usize,
    /// Whether this tile is the active external filter
    pub active: bool,
}

/// Page position; `page` and `page_count` are 1-based, `from`/`to` are the
/// 1-based row range shown.
#[derive(Debug, Clone, Serialize)]
pub struct PageViewModel {
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub from: usize,
    pub to: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SortViewModel {
    pub column: TopicColumn,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterViewModel {
    /// Empty means every status
    pub statuses: Vec<TopicStatus>,
    pub tile: Option<TopicStatus>,
}

#[derive(Debug, Serialize)]
pub struct TopicsPageViewModel {
    pub rows: Vec<TopicRowViewModel>,
    pub tiles: Vec<TileViewModel>,
    pub page: PageViewModel,
    pub sort: Option<SortViewModel>,
    pub filter: FilterViewModel,
}

#[derive(Debug, Serialize)]
pub struct TopicCountsViewModel {
    pub tiles: Vec<TileViewModel>,
    pub total: usize,
}
