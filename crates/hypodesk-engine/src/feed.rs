use hypodesk_types::FeedItem;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::ops::Range;

/// Visual size class of a feed card, derived from its text length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

/// Item-count bounds for a single feed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub max_weight: u32,
    pub min_items: usize,
    pub max_items: usize,
}

/// Tuning constants of the adaptive feed pager.
///
/// These are presentation choices, not correctness invariants, so every value
/// can be overridden from the `[feed]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedLayout {
    pub small_weight: u32,
    pub medium_weight: u32,
    pub large_weight: u32,
    /// Content longer than this is at least medium
    pub medium_threshold: usize,
    /// Content longer than this is large
    pub large_threshold: usize,
    pub max_page_weight: u32,
    pub min_items_per_page: usize,
    pub max_items_per_page: usize,
    /// Body length above which a card is shown truncated until expanded
    pub truncate_at: usize,
}

impl Default for FeedLayout {
    fn default() -> Self {
        Self {
            small_weight: 150,
            medium_weight: 250,
            large_weight: 500,
            medium_threshold: 200,
            large_threshold: 400,
            max_page_weight: 1200,
            min_items_per_page: 2,
            max_items_per_page: 6,
            truncate_at: 200,
        }
    }
}

impl FeedLayout {
    pub fn classify(&self, content_len: usize) -> SizeClass {
        if content_len > self.large_threshold {
            SizeClass::Large
        } else if content_len > self.medium_threshold {
            SizeClass::Medium
        } else {
            SizeClass::Small
        }
    }

    pub fn weight(&self, class: SizeClass) -> u32 {
        match class {
            SizeClass::Small => self.small_weight,
            SizeClass::Medium => self.medium_weight,
            SizeClass::Large => self.large_weight,
        }
    }

    pub fn item_weight(&self, item: &FeedItem) -> u32 {
        self.weight(self.classify(item.content_len()))
    }

    pub fn limits(&self) -> PageLimits {
        PageLimits {
            max_weight: self.max_page_weight,
            min_items: self.min_items_per_page,
            max_items: self.max_items_per_page,
        }
    }
}

/// Split `items` into page ranges with a greedy left-to-right pass.
///
/// A page is closed before an item when adding it would push the running
/// weight over `max_weight`, the page already holds `min_items`, and the item
/// is not the last one. A page is also closed as soon as it reaches
/// `max_items`. The concatenation of the returned ranges is always
/// `0..items.len()`.
pub fn bucket_ranges<T>(
    items: &[T],
    weight_fn: impl Fn(&T) -> u32,
    limits: PageLimits,
) -> Vec<Range<usize>> {
    let max_items = limits.max_items.max(1);
    let last = items.len().saturating_sub(1);

    let mut pages = Vec::new();
    let mut start = 0;
    let mut running: u32 = 0;

    for (i, item) in items.iter().enumerate() {
        let weight = weight_fn(item);
        let buffered = i - start;

        if running.saturating_add(weight) > limits.max_weight
            && buffered >= limits.min_items
            && i != last
        {
            pages.push(start..i);
            start = i;
            running = weight;
        } else {
            running = running.saturating_add(weight);
        }

        if i + 1 - start >= max_items {
            pages.push(start..i + 1);
            start = i + 1;
            running = 0;
        }
    }

    if start < items.len() {
        pages.push(start..items.len());
    }

    pages
}

/// Same as [`bucket_ranges`] but hands back the pages as slices.
pub fn bucketize<T>(
    items: &[T],
    weight_fn: impl Fn(&T) -> u32,
    limits: PageLimits,
) -> Vec<&[T]> {
    bucket_ranges(items, weight_fn, limits)
        .into_iter()
        .map(|range| &items[range])
        .collect()
}

/// Body text as displayed: cut to `limit` chars with a trailing "..." unless
/// the card is expanded or already short enough.
pub fn truncate_body(body: &str, limit: usize, expanded: bool) -> Cow<'_, str> {
    if expanded || body.chars().count() <= limit {
        return Cow::Borrowed(body);
    }

    let cut: String = body.chars().take(limit).collect();
    Cow::Owned(format!("{}...", cut))
}
