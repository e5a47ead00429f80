use crate::presentation::view_models::{
    CommandResultViewModel, FeedCardViewModel, FeedPageViewModel, Guidance, StatusBadge,
};
use hypodesk_engine::ActivityFeed;

pub fn present_feed_page(feed: &ActivityFeed) -> CommandResultViewModel<FeedPageViewModel> {
    let cards: Vec<FeedCardViewModel> = feed
        .cards()
        .into_iter()
        .map(|card| FeedCardViewModel {
            position: card.global_index + 1,
            tag: card.item.tag.clone(),
            title: card.item.title.clone(),
            size_class: card.size_class,
            body: card.body.map(|b| b.into_owned()),
            bullets: card.item.bullets.clone(),
            footer: card.item.footer.clone(),
            link: card.item.link.clone(),
            truncatable: card.truncatable,
            expanded: card.expanded,
        })
        .collect();

    let page = feed.page_index() + 1;
    let collapsed: Vec<usize> = cards
        .iter()
        .filter(|c| c.truncatable && !c.expanded)
        .map(|c| c.position)
        .collect();

    let content = FeedPageViewModel {
        page,
        page_count: feed.page_count(),
        has_prev: feed.has_prev(),
        has_next: feed.has_next(),
        total_items: feed.items().len(),
        cards,
    };

    let mut result = CommandResultViewModel::new(content);
    if feed.items().is_empty() {
        return result.with_badge(StatusBadge::info("The activity feed is empty"));
    }

    if let Some(first) = collapsed.first() {
        result = result.with_suggestion(
            Guidance::new("Show a truncated card in full")
                .with_command(format!("hypodesk feed --page {} --expand {}", page, first)),
        );
    }
    if feed.has_next() {
        result = result.with_suggestion(
            Guidance::new("Next page").with_command(format!("hypodesk feed --page {}", page + 1)),
        );
    }
    result
}
