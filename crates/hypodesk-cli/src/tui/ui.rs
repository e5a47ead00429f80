use hypodesk_engine::{SizeClass, SortDirection, TopicColumn};
use hypodesk_types::{RowStatus, TopicStatus};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
};

use super::app::{App, Focus};
use crate::presentation::formatters::{format_updated, truncate};

const KEY_HELP: &str = concat!(
    "q quit · Tab focus · 1-4 tile · 0 clear · c/s sort · d date · ",
    "f/space/a filter · ←/→ page · e expand · r reload"
);

fn status_color(status: TopicStatus) -> Color {
    match status {
        TopicStatus::Draft => Color::Yellow,
        TopicStatus::Submitted => Color::Blue,
        TopicStatus::Reviewed => Color::Magenta,
        TopicStatus::Approved => Color::Green,
    }
}

fn row_status_color(status: &RowStatus) -> Color {
    status.tracked().map_or(Color::Gray, status_color)
}

fn focus_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

pub(crate) fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    render_tiles(f, chunks[1], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[2]);

    render_table(f, body[0], app);
    render_feed(f, body[1], app);
    render_footer(f, chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled("Hypothesis Dashboard", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("  {}", app.user_name)),
    ];
    if app.loading {
        spans.push(Span::styled("  loading…", Style::default().fg(Color::Yellow)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_tiles(f: &mut Frame, area: Rect, app: &App) {
    let tiles = app.table.tiles();
    let active = app.table.filter().external();

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, tiles.len().max(1) as u32); tiles.len()])
        .split(area);

    for (i, (tile, cell)) in tiles.iter().zip(cells.iter()).enumerate() {
        let is_active = active == Some(tile.status);
        let mut style = Style::default().fg(status_color(tile.status));
        if is_active {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let text = format!("[{}] {}: {}", i + 1, tile.label, tile.value);
        let widget = Paragraph::new(Span::styled(text, style))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, *cell);
    }
}

fn header_label(app: &App, column: TopicColumn) -> String {
    let sort = app.table.sort();
    let arrow = match (sort.column(), sort.direction()) {
        (Some(c), Some(SortDirection::Ascending)) if c == column => " ↑",
        (Some(c), Some(SortDirection::Descending)) if c == column => " ↓",
        _ => "",
    };
    format!("{}{}", column.label(), arrow)
}

fn filter_line(app: &App) -> Line<'static> {
    let filter = app.table.filter();
    let mut spans = vec![Span::raw("Filter: ")];

    for (i, option) in app.filter_options().into_iter().enumerate() {
        let mark = if filter.is_checked(option) { "[x]" } else { "[ ]" };
        let mut style = Style::default();
        if i == app.filter_cursor {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!("{} {}", mark, option.label()), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

fn render_table(f: &mut Frame, area: Rect, app: &App) {
    let view = app.table.view();
    let info = view.info;

    let title = format!(
        " Topics {}-{} of {} · page {}/{} ",
        info.from,
        info.to,
        info.total,
        info.page_index + 1,
        info.page_count
    );
    let block = focus_block(title, app.focus == Focus::Table);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);
    f.render_widget(Paragraph::new(filter_line(app)), parts[0]);

    if view.rows.is_empty() {
        let empty = Paragraph::new("No topics match the current filter")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, parts[1]);
        return;
    }

    let highlighted = app.highlighted_column();
    let header = Row::new(TopicColumn::ALL.iter().map(|&column| {
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if column == highlighted {
            style = style.fg(Color::Cyan);
        }
        Cell::from(header_label(app, column)).style(style)
    }));

    let rows = view.rows.iter().map(|topic| {
        Row::new(vec![
            Cell::from(truncate(&topic.name, 28)),
            Cell::from(truncate(&topic.summary, 40)),
            Cell::from(topic.status.label())
                .style(Style::default().fg(row_status_color(&topic.status))),
            Cell::from(format_updated(topic.updated_at)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(28),
            Constraint::Percentage(42),
            Constraint::Percentage(14),
            Constraint::Percentage(16),
        ],
    )
    .header(header)
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    if app.focus == Focus::Table {
        state.select(Some(app.selected_row));
    }
    f.render_stateful_widget(table, parts[1], &mut state);
}

fn size_marker(class: SizeClass) -> &'static str {
    match class {
        SizeClass::Small => "S",
        SizeClass::Medium => "M",
        SizeClass::Large => "L",
    }
}

fn render_feed(f: &mut Frame, area: Rect, app: &App) {
    let feed = &app.feed;
    let title = format!(" Recent Activity · {}/{} ", feed.page_index() + 1, feed.page_count());
    let focused = app.focus == Focus::Feed;

    let mut lines: Vec<Line> = Vec::new();
    for (offset, card) in feed.cards().into_iter().enumerate() {
        let mut title_style = Style::default().add_modifier(Modifier::BOLD);
        if focused && offset == app.selected_card {
            title_style = title_style.add_modifier(Modifier::REVERSED);
        }

        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {} ", size_marker(card.size_class), card.item.tag),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(card.item.title.clone(), title_style),
        ]));
        if let Some(body) = &card.body {
            lines.push(Line::from(body.to_string()));
        }
        for bullet in &card.item.bullets {
            lines.push(Line::from(format!("• {}", bullet)));
        }
        if let Some(footer) = &card.item.footer {
            lines.push(Line::from(footer.clone()));
        }
        if card.truncatable {
            let action = if card.expanded { "See less (e)" } else { "See more (e)" };
            lines.push(Line::styled(action, Style::default().fg(Color::Cyan)));
        }
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(Text::from(lines))
        .block(focus_block(title, focused))
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::styled(KEY_HELP, Style::default().fg(Color::DarkGray))];

    if let Some(status) = &app.status_line {
        lines.push(Line::from(status.clone()));
    }

    f.render_widget(Paragraph::new(Text::from(lines)), area);
}
