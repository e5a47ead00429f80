use hypodesk_types::{StatusMetric, Topic, TopicStatus};
use std::num::NonZeroUsize;

use crate::filter::{FilterOption, FilterState, visible_rows};
use crate::metrics::status_counts;
use crate::pagination::{PageCursor, PageInfo};
use crate::sort::{SortState, TopicColumn, sort_records};

/// The derived, render-ready state of the topics table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<'a> {
    pub rows: Vec<&'a Topic>,
    pub info: PageInfo,
    pub sort: SortState<TopicColumn>,
    pub filter: &'a FilterState,
}

/// Topics table state: loaded rows plus sort, filter and page position.
///
/// The visible sequence is always derived as sort -> filter -> page. Any
/// change to the filter moves back to the first page, and every change that
/// can shrink the visible set clamps the page index.
#[derive(Debug, Clone)]
pub struct TopicsTable {
    rows: Vec<Topic>,
    sort: SortState<TopicColumn>,
    filter: FilterState,
    cursor: PageCursor,
}

impl TopicsTable {
    pub fn new(rows: Vec<Topic>, page_size: NonZeroUsize) -> Self {
        Self {
            rows,
            sort: SortState::none(),
            filter: FilterState::new(),
            cursor: PageCursor::new(page_size),
        }
    }

    pub fn rows(&self) -> &[Topic] {
        &self.rows
    }

    pub fn sort(&self) -> SortState<TopicColumn> {
        self.sort
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn page_index(&self) -> usize {
        self.cursor.page_index()
    }

    /// Replace the loaded rows after a reload. Sort and filter survive; the
    /// page index is clamped to the new row count.
    pub fn replace_rows(&mut self, rows: Vec<Topic>) {
        self.rows = rows;
        self.clamp();
    }

    pub fn tiles(&self) -> Vec<StatusMetric> {
        status_counts(&self.rows)
    }

    pub fn visible_count(&self) -> usize {
        self.rows.iter().filter(|t| self.filter.matches(t.status.tracked())).count()
    }

    pub fn cycle_sort(&mut self, column: TopicColumn) {
        self.sort = self.sort.cycle(column);
    }

    pub fn toggle_filter(&mut self, option: FilterOption) {
        self.filter.toggle(option);
        self.cursor.reset();
    }

    pub fn set_selected_statuses(&mut self, statuses: impl IntoIterator<Item = TopicStatus>) {
        self.filter.set_selection(statuses);
        self.cursor.reset();
    }

    /// Tile click. The same tile twice clears the external filter.
    pub fn toggle_tile(&mut self, status: TopicStatus) {
        self.filter.toggle_external(status);
        self.cursor.reset();
    }

    pub fn clear_tile(&mut self) {
        self.filter.clear_external();
        self.cursor.reset();
    }

    pub fn prev_page(&mut self) {
        self.cursor.prev();
    }

    pub fn next_page(&mut self) {
        let total = self.visible_count();
        self.cursor.next(total);
    }

    pub fn goto_page(&mut self, page_index: usize) {
        let total = self.visible_count();
        self.cursor.jump(page_index, total);
    }

    fn clamp(&mut self) {
        let total = self.visible_count();
        self.cursor.clamp(total);
    }

    pub fn view(&self) -> TableView<'_> {
        let sorted = sort_records(&self.rows, &self.sort);
        let visible = visible_rows(sorted, &self.filter);
        let page = self.cursor.apply(&visible);

        TableView {
            rows: page.items.to_vec(),
            info: page.info,
            sort: self.sort,
            filter: &self.filter,
        }
    }
}
