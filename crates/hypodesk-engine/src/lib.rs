// Engine module - pure view derivation for the dashboard screens.
// Everything here operates on data handed in by the caller and returns
// derived views; no I/O and no knowledge of where records come from.

pub mod activity;
pub mod feed;
pub mod filter;
pub mod metrics;
pub mod pagination;
pub mod sort;
pub mod table;

pub use activity::{ActivityFeed, FeedCard};
pub use feed::{FeedLayout, PageLimits, SizeClass, bucket_ranges, bucketize, truncate_body};
pub use filter::{FilterOption, FilterState, HasStatus, StatusSelection, visible_rows};
pub use metrics::status_counts;
pub use pagination::{Page, PageCursor, PageInfo, page_count, paginate};
pub use sort::{
    SortDirection, SortState, SortValue, Sortable, TopicColumn, cycle_sort, sort_records,
};
pub use table::{TableView, TopicsTable};
