use chrono::NaiveDateTime;
use hypodesk_types::Topic;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Sortable columns of the topics table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicColumn {
    Name,
    Summary,
    Status,
    UpdatedAt,
}

impl TopicColumn {
    /// Columns in table order.
    pub const ALL: [TopicColumn; 4] = [
        TopicColumn::Name,
        TopicColumn::Summary,
        TopicColumn::Status,
        TopicColumn::UpdatedAt,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TopicColumn::Name => "Topic Name",
            TopicColumn::Summary => "Topic Summary",
            TopicColumn::Status => "Status",
            TopicColumn::UpdatedAt => "Updated",
        }
    }
}

/// Tri-state column sort.
///
/// Column and direction are stored together so a direction can never exist
/// without a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState<C> {
    active: Option<(C, SortDirection)>,
}

impl<C> Default for SortState<C> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<C: Copy + PartialEq> SortState<C> {
    pub fn new(column: C, direction: SortDirection) -> Self {
        Self {
            active: Some((column, direction)),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn column(&self) -> Option<C> {
        self.active.map(|(column, _)| column)
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.active.map(|(_, direction)| direction)
    }

    pub fn is_sorted(&self) -> bool {
        self.active.is_some()
    }

    /// Advance the cycle for `column`: a different column starts ascending,
    /// the same column goes ascending -> descending -> unsorted.
    pub fn cycle(self, column: C) -> Self {
        match self.active {
            Some((current, SortDirection::Ascending)) if current == column => {
                Self::new(column, SortDirection::Descending)
            }
            Some((current, SortDirection::Descending)) if current == column => Self::none(),
            _ => Self::new(column, SortDirection::Ascending),
        }
    }
}

/// A value extracted from a record for comparison.
///
/// `Missing` marks a record without a value for the column; such records
/// go after every other record whichever way the column is sorted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Text(&'a str),
    Date(NaiveDateTime),
    Number(f64),
    Missing,
}

impl SortValue<'_> {
    fn rank(&self) -> u8 {
        match self {
            SortValue::Text(_) => 0,
            SortValue::Date(_) => 1,
            SortValue::Number(_) => 2,
            SortValue::Missing => 3,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, SortValue::Missing)
    }

    pub fn compare(&self, other: &SortValue<'_>) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => collate(a, b),
            (SortValue::Date(a), SortValue::Date(b)) => a.cmp(b),
            (SortValue::Number(a), SortValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Records that can be ordered by a set of columns.
pub trait Sortable {
    type Column: Copy + PartialEq;

    fn sort_value(&self, column: Self::Column) -> SortValue<'_>;
}

impl Sortable for Topic {
    type Column = TopicColumn;

    fn sort_value(&self, column: TopicColumn) -> SortValue<'_> {
        match column {
            TopicColumn::Name => SortValue::Text(&self.name),
            TopicColumn::Summary => SortValue::Text(&self.summary),
            TopicColumn::Status => SortValue::Text(self.status.label()),
            TopicColumn::UpdatedAt => self.updated_at.map_or(SortValue::Missing, SortValue::Date),
        }
    }
}

/// Cycle the sort state for `column`. See [`SortState::cycle`].
pub fn cycle_sort<C: Copy + PartialEq>(column: C, current: SortState<C>) -> SortState<C> {
    current.cycle(column)
}

/// Order `rows` according to `state` without touching the input.
///
/// The sort is stable: rows with equal keys keep their input order in both
/// directions. Rows without a value for the column come last in both
/// directions. An unsorted state returns the input order.
pub fn sort_records<'a, T: Sortable>(
    rows: impl IntoIterator<Item = &'a T>,
    state: &SortState<T::Column>,
) -> Vec<&'a T>
where
    T: 'a,
{
    let mut ordered: Vec<&T> = rows.into_iter().collect();

    if let Some((column, direction)) = state.active {
        ordered.sort_by(|a, b| {
            let (a, b) = (a.sort_value(column), b.sort_value(column));
            match (a.is_missing(), b.is_missing()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => match direction {
                    SortDirection::Ascending => a.compare(&b),
                    SortDirection::Descending => a.compare(&b).reverse(),
                },
            }
        });
    }

    ordered
}

/// Human-oriented string ordering.
///
/// Letters compare case-insensitively first; only when two strings are
/// otherwise identical does case decide, with lowercase before uppercase.
/// Digits are compared character by character, so "10" sorts before "2".
fn collate(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    primary.then_with(|| {
        a.chars()
            .zip(b.chars())
            .map(|(x, y)| case_rank(x).cmp(&case_rank(y)))
            .find(|o| o.is_ne())
            .unwrap_or_else(|| a.chars().count().cmp(&b.chars().count()))
    })
}

fn case_rank(c: char) -> u8 {
    if c.is_uppercase() { 1 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hypodesk_types::{RecordId, TopicStatus};

    fn topic(id: u64, name: &str, date: (i32, u32, u32)) -> Topic {
        at(id, name, date, 0)
    }

    fn at(id: u64, name: &str, date: (i32, u32, u32), hour: u32) -> Topic {
        let day = chrono::NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
        Topic {
            id: RecordId::from(id),
            name: name.to_string(),
            summary: String::new(),
            status: TopicStatus::Draft.into(),
            updated_at: day.and_hms_opt(hour, 0, 0),
        }
    }

    fn by(column: TopicColumn, direction: SortDirection) -> SortState<TopicColumn> {
        SortState::new(column, direction)
    }

    fn ids(rows: &[&Topic]) -> Vec<String> {
        rows.iter().map(|t| t.id.to_string()).collect()
    }

    #[test]
    fn test_cycle_new_column_starts_ascending() {
        let state = SortState::new(TopicColumn::Name, SortDirection::Descending);
        let next = state.cycle(TopicColumn::UpdatedAt);

        assert_eq!(next.column(), Some(TopicColumn::UpdatedAt));
        assert_eq!(next.direction(), Some(SortDirection::Ascending));
    }

    #[test]
    fn test_cycle_same_column_walks_asc_desc_none() {
        let s0 = SortState::<TopicColumn>::none();
        let s1 = cycle_sort(TopicColumn::Name, s0);
        let s2 = cycle_sort(TopicColumn::Name, s1);
        let s3 = cycle_sort(TopicColumn::Name, s2);

        assert_eq!(s1.direction(), Some(SortDirection::Ascending));
        assert_eq!(s2.direction(), Some(SortDirection::Descending));
        assert_ne!(s1, s2);
        assert_eq!(s3, s0);
        assert_eq!(s3.column(), None);
        assert_eq!(s3.direction(), None);
    }

    #[test]
    fn test_unsorted_keeps_input_order() {
        let rows = vec![topic(2, "b", (2025, 1, 1)), topic(1, "a", (2025, 1, 1))];
        let sorted = sort_records(&rows, &SortState::none());

        assert_eq!(ids(&sorted), vec!["2", "1"]);
    }

    #[test]
    fn test_dates_sort_as_instants() {
        let rows = vec![
            topic(1, "x", (2025, 10, 30)),
            topic(2, "x", (2024, 12, 31)),
            topic(3, "x", (2025, 2, 1)),
        ];

        let asc = sort_records(&rows, &by(TopicColumn::UpdatedAt, SortDirection::Ascending));
        let desc = sort_records(&rows, &by(TopicColumn::UpdatedAt, SortDirection::Descending));

        assert_eq!(ids(&asc), vec!["2", "3", "1"]);
        assert_eq!(ids(&desc), vec!["1", "3", "2"]);
    }

    #[test]
    fn test_same_day_timestamps_order_by_time() {
        let rows = vec![at(1, "morning", (2025, 10, 30), 8), at(2, "night", (2025, 10, 30), 23)];

        let desc = sort_records(&rows, &by(TopicColumn::UpdatedAt, SortDirection::Descending));
        let asc = sort_records(&rows, &by(TopicColumn::UpdatedAt, SortDirection::Ascending));

        assert_eq!(ids(&desc), vec!["2", "1"]);
        assert_eq!(ids(&asc), vec!["1", "2"]);
    }

    #[test]
    fn test_missing_dates_go_last_in_both_directions() {
        let mut undated = topic(1, "undated", (2025, 1, 1));
        undated.updated_at = None;
        let rows = vec![undated, topic(2, "x", (2024, 1, 1)), topic(3, "x", (2025, 1, 1))];

        let asc = sort_records(&rows, &by(TopicColumn::UpdatedAt, SortDirection::Ascending));
        let desc = sort_records(&rows, &by(TopicColumn::UpdatedAt, SortDirection::Descending));

        assert_eq!(ids(&asc), vec!["2", "3", "1"]);
        assert_eq!(ids(&desc), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_ties_keep_input_order_in_both_directions() {
        let rows = vec![
            topic(1, "same", (2025, 1, 1)),
            topic(2, "other", (2025, 1, 1)),
            topic(3, "same", (2025, 1, 1)),
        ];

        let asc = sort_records(&rows, &by(TopicColumn::Name, SortDirection::Ascending));
        let desc = sort_records(&rows, &by(TopicColumn::Name, SortDirection::Descending));

        assert_eq!(ids(&asc), vec!["2", "1", "3"]);
        assert_eq!(ids(&desc), vec!["1", "3", "2"]);
    }

    #[test]
    fn test_text_collation_is_case_insensitive_first() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("Topic Name 10", "Topic Name 2"), Ordering::Less);
        assert_eq!(collate("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let rows = vec![topic(2, "b", (2025, 1, 1)), topic(1, "a", (2025, 1, 1))];
        let _ = sort_records(&rows, &by(TopicColumn::Name, SortDirection::Ascending));

        assert_eq!(rows[0].id.as_str(), "2");
    }
}
