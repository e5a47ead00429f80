use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters;
use anyhow::{Result, anyhow};
use hypodesk_engine::{TopicColumn, TopicsTable, status_counts};
use hypodesk_types::TopicStatus;
use std::num::NonZeroUsize;

pub struct ListOptions {
    /// Dropdown selection; empty means "All"
    pub statuses: Vec<TopicStatus>,
    pub tile: Option<TopicStatus>,
    pub sort: Option<TopicColumn>,
    pub descending: bool,
    /// 1-based
    pub page: usize,
    pub page_size: Option<usize>,
}

pub fn list(ctx: &ExecutionContext, options: ListOptions) -> Result<()> {
    let desk = ctx.desk()?;
    let topics = desk.dashboard()?.load_topics()?;

    let page_size = match options.page_size {
        Some(size) => {
            NonZeroUsize::new(size).ok_or_else(|| anyhow!("--page-size must be greater than 0"))?
        }
        None => desk.config().page_size(),
    };

    let mut table = TopicsTable::new(topics, page_size);
    if !options.statuses.is_empty() {
        table.set_selected_statuses(options.statuses);
    }
    if let Some(status) = options.tile {
        table.toggle_tile(status);
    }
    if let Some(column) = options.sort {
        table.cycle_sort(column);
        if options.descending {
            table.cycle_sort(column);
        }
    }
    table.goto_page(options.page.saturating_sub(1));

    let view_model = presenters::present_topics_page(&table);
    ctx.renderer().render(view_model)
}

pub fn counts(ctx: &ExecutionContext) -> Result<()> {
    let topics = ctx.desk()?.dashboard()?.load_topics()?;

    let view_model = presenters::present_topic_counts(status_counts(&topics));
    ctx.renderer().render(view_model)
}
