use std::fmt;

use hypodesk_engine::{SortDirection, TopicColumn};

use crate::presentation::formatters::text::single_line;
use crate::presentation::formatters::{format_updated, style, truncate};
use crate::presentation::view_models::{
    CreateView, TileViewModel, TopicCountsViewModel, TopicsPageViewModel,
};

const ID_WIDTH: usize = 6;
const NAME_WIDTH: usize = 24;
const SUMMARY_WIDTH: usize = 40;
const STATUS_WIDTH: usize = 10;

impl CreateView for TopicsPageViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(TopicsPageView { data: self })
    }
}

impl CreateView for TopicCountsViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(TopicCountsView { data: self })
    }
}

fn write_tiles(f: &mut fmt::Formatter<'_>, tiles: &[TileViewModel]) -> fmt::Result {
    let line = tiles
        .iter()
        .map(|t| {
            let text = format!("{}: {}", t.label, t.value);
            if t.active { format!("[{}]", style::bold(&text)) } else { text }
        })
        .collect::<Vec<_>>()
        .join("   ");
    writeln!(f, "{}", line)
}

struct TopicsPageView<'a> {
    data: &'a TopicsPageViewModel,
}

impl<'a> TopicsPageView<'a> {
    fn header(&self, column: TopicColumn) -> String {
        let marker = match &self.data.sort {
            Some(sort) if sort.column == column => match sort.direction {
                SortDirection::Ascending => " ↑",
                SortDirection::Descending => " ↓",
            },
            _ => "",
        };
        format!("{}{}", column.label(), marker)
    }

    fn filter_label(&self) -> String {
        let statuses = &self.data.filter.statuses;
        if statuses.is_empty() {
            "All".to_string()
        } else {
            statuses.iter().map(|s| s.label()).collect::<Vec<_>>().join(", ")
        }
    }
}

impl<'a> fmt::Display for TopicsPageView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data;

        write_tiles(f, &data.tiles)?;
        writeln!(f, "Status filter: {}", self.filter_label())?;
        writeln!(f)?;

        if data.rows.is_empty() {
            return writeln!(f, "{}", style::dimmed("No topics to show."));
        }

        let header = format!(
            "{:<id$}  {:<name$}  {:<summary$}  {:<status$}  {}",
            "ID",
            self.header(TopicColumn::Name),
            self.header(TopicColumn::Summary),
            self.header(TopicColumn::Status),
            self.header(TopicColumn::UpdatedAt),
            id = ID_WIDTH,
            name = NAME_WIDTH,
            summary = SUMMARY_WIDTH,
            status = STATUS_WIDTH,
        );
        writeln!(f, "{}", style::bold(&header))?;

        for row in &data.rows {
            writeln!(
                f,
                "{:<id$}  {:<name$}  {:<summary$}  {}  {}",
                truncate(&row.id, ID_WIDTH),
                truncate(&single_line(&row.name), NAME_WIDTH),
                truncate(&single_line(&row.summary), SUMMARY_WIDTH),
                style::row_status(&row.status, STATUS_WIDTH),
                format_updated(row.updated_at),
                id = ID_WIDTH,
                name = NAME_WIDTH,
                summary = SUMMARY_WIDTH,
            )?;
        }

        let page = &data.page;
        writeln!(f)?;
        writeln!(
            f,
            "{}",
            style::dimmed(&format!(
                "{}-{} of {}  (page {} of {}, {} per page)",
                page.from, page.to, page.total, page.page, page.page_count, page.page_size
            ))
        )
    }
}

struct TopicCountsView<'a> {
    data: &'a TopicCountsViewModel,
}

impl<'a> fmt::Display for TopicCountsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.data.tiles {
            writeln!(f, "  {}  {:>4}", style::status(tile.status, STATUS_WIDTH), tile.value)?;
        }
        writeln!(f, "  {:<width$}  {:>4}", "Total", self.data.total, width = STATUS_WIDTH)
    }
}
