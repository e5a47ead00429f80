use std::fmt;

use hypodesk_engine::SizeClass;

use crate::presentation::formatters::style;
use crate::presentation::view_models::{CreateView, FeedCardViewModel, FeedPageViewModel};

impl CreateView for FeedPageViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(FeedPageView { data: self })
    }
}

struct FeedPageView<'a> {
    data: &'a FeedPageViewModel,
}

fn size_label(class: SizeClass) -> &'static str {
    match class {
        SizeClass::Small => "small",
        SizeClass::Medium => "medium",
        SizeClass::Large => "large",
    }
}

fn write_card(f: &mut fmt::Formatter<'_>, card: &FeedCardViewModel) -> fmt::Result {
    writeln!(
        f,
        "#{} {}  {}",
        card.position,
        style::dimmed(&format!("[{} · {}]", card.tag, size_label(card.size_class))),
        style::bold(&card.title)
    )?;

    if let Some(body) = &card.body {
        for line in body.lines() {
            writeln!(f, "    {}", line)?;
        }
    }
    for bullet in &card.bullets {
        writeln!(f, "    • {}", bullet)?;
    }
    if let Some(footer) = &card.footer {
        writeln!(f, "    {}", footer)?;
    }
    if let Some(link) = &card.link {
        writeln!(f, "    {}", style::command(link))?;
    }
    if card.truncatable {
        let action = if card.expanded { "See less" } else { "See more" };
        writeln!(f, "    {}", style::dimmed(&format!("({})", action)))?;
    }
    Ok(())
}

impl<'a> fmt::Display for FeedPageView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data;
        writeln!(f, "{}", style::bold("Recent Activity"))?;
        writeln!(f)?;

        for card in &data.cards {
            write_card(f, card)?;
            writeln!(f)?;
        }

        let prev = if data.has_prev { "‹ prev" } else { "      " };
        let next = if data.has_next { "next ›" } else { "" };
        writeln!(
            f,
            "{}  page {} of {}  {}",
            style::dimmed(prev),
            data.page,
            data.page_count,
            style::dimmed(next)
        )
    }
}
