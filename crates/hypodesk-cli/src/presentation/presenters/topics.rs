use crate::presentation::view_models::{
    CommandResultViewModel, FilterViewModel, Guidance, PageViewModel, SortViewModel, StatusBadge,
    TileViewModel, TopicCountsViewModel, TopicRowViewModel, TopicsPageViewModel,
};
use hypodesk_engine::{StatusSelection, TableView, TopicsTable};
use hypodesk_types::{StatusMetric, Topic, TopicStatus};

fn row_vm(topic: &Topic) -> TopicRowViewModel {
    TopicRowViewModel {
        id: topic.id.to_string(),
        name: topic.name.clone(),
        summary: topic.summary.clone(),
        status: topic.status.clone(),
        updated_at: topic.updated_at,
    }
}

pub fn tile_vms(tiles: Vec<StatusMetric>, active: Option<TopicStatus>) -> Vec<TileViewModel> {
    tiles
        .into_iter()
        .map(|t| TileViewModel {
            active: active == Some(t.status),
            id: t.id,
            label: t.label,
            status: t.status,
            value: t.value,
        })
        .collect()
}

fn page_vm(view: &TableView<'_>) -> PageViewModel {
    let info = view.info;
    PageViewModel {
        page: info.page_index + 1,
        page_count: info.page_count,
        page_size: info.page_size,
        from: info.from,
        to: info.to,
        total: info.total,
    }
}

pub fn present_topics_page(table: &TopicsTable) -> CommandResultViewModel<TopicsPageViewModel> {
    let view = table.view();
    let filter = view.filter;

    let statuses = match filter.selection() {
        StatusSelection::All => Vec::new(),
        StatusSelection::Only(selected) => selected.iter().copied().collect(),
    };

    let content = TopicsPageViewModel {
        rows: view.rows.iter().map(|t| row_vm(t)).collect(),
        tiles: tile_vms(table.tiles(), filter.external()),
        page: page_vm(&view),
        sort: view
            .sort
            .column()
            .zip(view.sort.direction())
            .map(|(column, direction)| SortViewModel { column, direction }),
        filter: FilterViewModel {
            statuses,
            tile: filter.external(),
        },
    };

    let total = content.page.total;
    let has_next = view.info.has_next();
    let next_page = content.page.page + 1;
    let mut result = CommandResultViewModel::new(content);

    result = if total == 0 {
        result.with_badge(StatusBadge::info("No topics match the current filter"))
    } else {
        result.with_badge(StatusBadge::success(if total == 1 {
            "1 topic".to_string()
        } else {
            format!("{} topics", total)
        }))
    };

    if has_next {
        let command = format!("hypodesk topics list --page {}", next_page);
        result = result.with_suggestion(Guidance::new("Next page").with_command(command));
    }

    result
}

pub fn present_topic_counts(
    tiles: Vec<StatusMetric>,
) -> CommandResultViewModel<TopicCountsViewModel> {
    let total = tiles.iter().map(|t| t.value).sum();
    CommandResultViewModel::new(TopicCountsViewModel {
        tiles: tile_vms(tiles, None),
        total,
    })
}
