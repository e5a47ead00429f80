use serde::Serialize;
use std::num::NonZeroUsize;

/// Position and totals of one page, without the rows themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    /// 1-based position of the first row on the page, 0 when there are no rows
    pub from: usize,
    /// 1-based position of the last row on the page
    pub to: usize,
    pub total: usize,
}

impl PageInfo {
    pub fn has_prev(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.page_count
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub info: PageInfo,
}

/// Number of pages for `total` rows; never less than one.
pub fn page_count(total: usize, page_size: NonZeroUsize) -> usize {
    total.div_ceil(page_size.get()).max(1)
}

fn clamp_index(page_index: usize, total: usize, page_size: NonZeroUsize) -> usize {
    page_index.min(page_count(total, page_size) - 1)
}

/// Slice out one page of `rows`. An out-of-range `page_index` is clamped to
/// the last page.
pub fn paginate<T>(rows: &[T], page_size: NonZeroUsize, page_index: usize) -> Page<'_, T> {
    let total = rows.len();
    let size = page_size.get();
    let page_index = clamp_index(page_index, total, page_size);

    let start = (page_index * size).min(total);
    let end = (start + size).min(total);

    Page {
        items: &rows[start..end],
        info: PageInfo {
            page_index,
            page_count: page_count(total, page_size),
            page_size: size,
            from: if total == 0 { 0 } else { page_index * size + 1 },
            to: total.min((page_index + 1) * size),
            total,
        },
    }
}

/// Fixed-size page navigation state.
///
/// The cursor does not own the rows; every operation takes the current row
/// count so the index can be clamped whenever the visible set changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page_size: NonZeroUsize,
    page_index: usize,
}

impl PageCursor {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            page_index: 0,
        }
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn reset(&mut self) {
        self.page_index = 0;
    }

    /// Pull the index back into range after `total` changed.
    pub fn clamp(&mut self, total: usize) {
        self.page_index = clamp_index(self.page_index, total, self.page_size);
    }

    pub fn prev(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn next(&mut self, total: usize) {
        self.page_index = clamp_index(self.page_index.saturating_add(1), total, self.page_size);
    }

    pub fn jump(&mut self, page_index: usize, total: usize) {
        self.page_index = clamp_index(page_index, total, self.page_size);
    }

    pub fn apply<'a, T>(&self, rows: &'a [T]) -> Page<'a, T> {
        paginate(rows, self.page_size, self.page_index)
    }
}
