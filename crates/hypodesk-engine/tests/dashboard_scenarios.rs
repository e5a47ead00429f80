use hypodesk_engine::{
    FilterOption, FilterState, SortDirection, SortState, TopicColumn, TopicsTable, cycle_sort,
    paginate, sort_records, status_counts, visible_rows,
};
use hypodesk_testing::fixtures;
use hypodesk_types::{Topic, TopicStatus};
use std::num::NonZeroUsize;

fn ids(rows: &[&Topic]) -> Vec<String> {
    rows.iter().map(|t| t.id.to_string()).collect()
}

#[test]
fn test_draft_filter_returns_ten_of_twenty_five() {
    let topics = fixtures::topics();
    let filter = FilterState::with_selection([TopicStatus::Draft]);

    let drafts = visible_rows(&topics, &filter);

    assert_eq!(drafts.len(), 10);
    assert!(drafts.iter().all(|t| t.status == TopicStatus::Draft));
}

#[test]
fn test_date_sort_desc_then_asc_keeps_relative_order() {
    let topics = fixtures::topics();
    let filter = FilterState::with_selection([TopicStatus::Draft]);
    let drafts = visible_rows(&topics, &filter);

    let desc = sort_records(
        drafts.iter().copied(),
        &SortState::new(TopicColumn::UpdatedAt, SortDirection::Descending),
    );
    let asc = sort_records(
        desc.iter().copied(),
        &SortState::new(TopicColumn::UpdatedAt, SortDirection::Ascending),
    );

    assert_eq!(ids(&desc), ids(&drafts));
    assert_eq!(ids(&asc), ids(&drafts));
}

#[test]
fn test_three_cycles_restore_unsorted_for_every_column() {
    for column in [
        TopicColumn::Name,
        TopicColumn::Summary,
        TopicColumn::Status,
        TopicColumn::UpdatedAt,
    ] {
        let start = SortState::none();
        let first = cycle_sort(column, start);
        let second = cycle_sort(column, first);
        let third = cycle_sort(column, second);

        assert_ne!(first, second);
        assert_eq!(third, start);
    }
}

#[test]
fn test_stable_sort_is_repeatable() {
    let topics = fixtures::topics();
    let by_status = SortState::new(TopicColumn::Status, SortDirection::Ascending);

    let once = sort_records(&topics, &by_status);
    let twice = sort_records(once.iter().copied(), &by_status);

    assert_eq!(ids(&once), ids(&twice));
    // Approved rows 16..20 come first, in input order
    assert_eq!(&ids(&once)[..5], &["16", "17", "18", "19", "20"]);
}

#[test]
fn test_empty_and_full_selection_show_everything() {
    let topics = fixtures::topics();

    let empty = visible_rows(&topics, &FilterState::with_selection(Vec::<TopicStatus>::new()));
    let full = visible_rows(&topics, &FilterState::with_selection(TopicStatus::ALL));

    assert_eq!(ids(&empty), ids(&full));
    assert_eq!(empty.len(), 25);
}

#[test]
fn test_tile_filter_ignores_dropdown_changes() {
    let topics = fixtures::topics();
    let mut filter = FilterState::new().with_external(TopicStatus::Reviewed);
    let before = ids(&visible_rows(&topics, &filter));

    filter.toggle(FilterOption::Status(TopicStatus::Draft));
    filter.toggle(FilterOption::Status(TopicStatus::Approved));
    let after = ids(&visible_rows(&topics, &filter));

    assert_eq!(before, after);
    assert_eq!(after, vec!["11", "12", "13", "14", "15"]);
}

#[test]
fn test_tile_counts_match_fixture_split() {
    let tiles = status_counts(&fixtures::topics());
    let values: Vec<usize> = tiles.iter().map(|t| t.value).collect();

    assert_eq!(values, vec![10, 5, 5, 5]);
}

#[test]
fn test_table_pages_filtered_rows() {
    let mut table = TopicsTable::new(fixtures::topics(), NonZeroUsize::new(4).unwrap());
    table.toggle_tile(TopicStatus::Draft);
    table.goto_page(2);

    let view = table.view();
    assert_eq!(view.info.page_count, 3);
    assert_eq!((view.info.from, view.info.to, view.info.total), (9, 10, 10));
    assert_eq!(ids(&view.rows), vec!["24", "25"]);

    table.toggle_tile(TopicStatus::Draft);
    assert_eq!(table.page_index(), 0);
    assert_eq!(table.view().info.total, 25);
}

#[test]
fn test_pagination_invariants_hold_for_fixture() {
    let topics = fixtures::topics();
    for size in 1..=30 {
        let page_size = NonZeroUsize::new(size).unwrap();
        for index in 0..30 {
            let page = paginate(&topics, page_size, index);
            assert!(page.info.page_index < page.info.page_count);
            assert!(page.items.len() <= size);
        }
    }
}
