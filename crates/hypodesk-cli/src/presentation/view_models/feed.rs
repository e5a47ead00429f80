use hypodesk_engine::SizeClass;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FeedCardViewModel {
    /// 1-based position in the whole feed; what `--expand` takes
    pub position: usize,
    pub tag: String,
    pub title: String,
    pub size_class: SizeClass,
    pub body: Option<String>,
    pub bullets: Vec<String>,
    pub footer: Option<String>,
    pub link: Option<String>,
    pub truncatable: bool,
    pub expanded: bool,
}

#[derive(Debug, Serialize)]
pub struct FeedPageViewModel {
    pub page: usize,
    pub page_count: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub total_items: usize,
    pub cards: Vec<FeedCardViewModel>,
}
