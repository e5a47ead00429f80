use hypodesk_types::FeedItem;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::ops::Range;

use crate::feed::{FeedLayout, SizeClass, bucket_ranges, truncate_body};

/// A feed card ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedCard<'a> {
    /// Position in the whole feed; the key for expand/collapse state
    pub global_index: usize,
    pub item: &'a FeedItem,
    pub size_class: SizeClass,
    pub body: Option<Cow<'a, str>>,
    /// Whether the card offers "See more"/"See less"
    pub truncatable: bool,
    pub expanded: bool,
}

/// Activity feed state: items, their page split and per-card expansion.
#[derive(Debug, Clone)]
pub struct ActivityFeed {
    items: Vec<FeedItem>,
    layout: FeedLayout,
    pages: Vec<Range<usize>>,
    page_index: usize,
    expanded: BTreeSet<usize>,
}

impl ActivityFeed {
    pub fn new(items: Vec<FeedItem>, layout: FeedLayout) -> Self {
        let pages = Self::split(&items, &layout);
        Self {
            items,
            layout,
            pages,
            page_index: 0,
            expanded: BTreeSet::new(),
        }
    }

    fn split(items: &[FeedItem], layout: &FeedLayout) -> Vec<Range<usize>> {
        bucket_ranges(items, |item| layout.item_weight(item), layout.limits())
    }

    /// Swap in a new content version. Pages are recomputed and all local
    /// navigation and expansion state starts over.
    pub fn replace_items(&mut self, items: Vec<FeedItem>) {
        self.pages = Self::split(&items, &self.layout);
        self.items = items;
        self.page_index = 0;
        self.expanded.clear();
    }

    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    pub fn layout(&self) -> &FeedLayout {
        &self.layout
    }

    /// Never less than one, even for an empty feed.
    pub fn page_count(&self) -> usize {
        self.pages.len().max(1)
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn has_prev(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.page_count()
    }

    pub fn prev(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.page_index += 1;
        }
    }

    pub fn goto(&mut self, page_index: usize) {
        self.page_index = page_index.min(self.page_count() - 1);
    }

    /// Global index of the card at `offset` on the current page.
    pub fn global_index(&self, offset: usize) -> Option<usize> {
        let range = self.pages.get(self.page_index)?;
        let index = range.start + offset;
        (index < range.end).then_some(index)
    }

    pub fn is_expanded(&self, global_index: usize) -> bool {
        self.expanded.contains(&global_index)
    }

    pub fn toggle_expand(&mut self, global_index: usize) {
        if global_index >= self.items.len() {
            return;
        }
        if !self.expanded.remove(&global_index) {
            self.expanded.insert(global_index);
        }
    }

    /// Cards of the current page.
    pub fn cards(&self) -> Vec<FeedCard<'_>> {
        let Some(range) = self.pages.get(self.page_index) else {
            return Vec::new();
        };

        range
            .clone()
            .map(|global_index| {
                let item = &self.items[global_index];
                let expanded = self.is_expanded(global_index);
                let limit = self.layout.truncate_at;

                FeedCard {
                    global_index,
                    item,
                    size_class: self.layout.classify(item.content_len()),
                    body: item
                        .body
                        .as_deref()
                        .map(|body| truncate_body(body, limit, expanded)),
                    truncatable: item
                        .body
                        .as_deref()
                        .is_some_and(|body| body.chars().count() > limit),
                    expanded,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, body_len: usize) -> FeedItem {
        FeedItem {
            tag: "Information".to_string(),
            title: title.to_string(),
            body: Some("x".repeat(body_len)),
            bullets: Vec::new(),
            footer: None,
            link: None,
        }
    }

    #[test]
    fn test_empty_feed_has_one_empty_page() {
        let feed = ActivityFeed::new(Vec::new(), FeedLayout::default());

        assert_eq!(feed.page_count(), 1);
        assert!(feed.cards().is_empty());
        assert!(!feed.has_next());
    }

    #[test]
    fn test_identical_items_expand_independently() {
        let items = vec![item("same", 300), item("same", 300)];
        let mut feed = ActivityFeed::new(items, FeedLayout::default());

        feed.toggle_expand(1);
        let cards = feed.cards();

        assert!(!cards[0].expanded);
        assert!(cards[1].expanded);
        assert!(cards[0].body.as_deref().is_some_and(|b| b.ends_with("...")));
        assert_eq!(cards[1].body.as_deref().map(str::len), Some(300));
    }

    #[test]
    fn test_global_index_offsets_by_page() {
        let items: Vec<FeedItem> = (0..8).map(|i| item(&i.to_string(), 10)).collect();
        let mut feed = ActivityFeed::new(items, FeedLayout::default());

        feed.next();
        assert_eq!(feed.global_index(0), Some(6));
        assert_eq!(feed.global_index(1), Some(7));
        assert_eq!(feed.global_index(2), None);
    }

    #[test]
    fn test_navigation_clamps() {
        let items: Vec<FeedItem> = (0..8).map(|i| item(&i.to_string(), 10)).collect();
        let mut feed = ActivityFeed::new(items, FeedLayout::default());

        feed.prev();
        assert_eq!(feed.page_index(), 0);
        feed.goto(9);
        assert_eq!(feed.page_index(), 1);
        feed.next();
        assert_eq!(feed.page_index(), 1);
    }

    #[test]
    fn test_replace_items_resets_state() {
        let items = vec![item("a", 300), item("b", 10)];
        let mut feed = ActivityFeed::new(items, FeedLayout::default());
        feed.toggle_expand(0);

        feed.replace_items(vec![item("c", 300)]);
        assert!(!feed.is_expanded(0));
        assert_eq!(feed.page_index(), 0);
    }

    #[test]
    fn test_short_bodies_are_not_truncatable() {
        let feed = ActivityFeed::new(vec![item("a", 200), item("b", 201)], FeedLayout::default());
        let cards = feed.cards();

        assert!(!cards[0].truncatable);
        assert!(cards[1].truncatable);
    }
}
