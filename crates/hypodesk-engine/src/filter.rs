use hypodesk_types::{Topic, TopicStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Records that carry a lifecycle status. `None` for a status the desk does
/// not track; such rows are only visible in the default view.
pub trait HasStatus {
    fn status(&self) -> Option<TopicStatus>;
}

impl HasStatus for Topic {
    fn status(&self) -> Option<TopicStatus> {
        self.status.tracked()
    }
}

/// Status selection of the in-table filter control.
///
/// "Nothing selected" and "everything selected" both mean no filtering, so
/// both collapse into `All`. `Only` always holds a non-empty, strict subset
/// of [`TopicStatus::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusSelection {
    #[default]
    All,
    Only(BTreeSet<TopicStatus>),
}

impl StatusSelection {
    pub fn from_statuses(statuses: impl IntoIterator<Item = TopicStatus>) -> Self {
        let set: BTreeSet<TopicStatus> = statuses.into_iter().collect();
        Self::normalize(set)
    }

    fn normalize(set: BTreeSet<TopicStatus>) -> Self {
        if set.is_empty() || TopicStatus::ALL.iter().all(|s| set.contains(s)) {
            StatusSelection::All
        } else {
            StatusSelection::Only(set)
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, StatusSelection::All)
    }

    pub fn contains(&self, status: TopicStatus) -> bool {
        match self {
            StatusSelection::All => true,
            StatusSelection::Only(set) => set.contains(&status),
        }
    }
}

/// One entry of the status filter dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOption {
    All,
    Status(TopicStatus),
}

impl FilterOption {
    /// Dropdown entries in display order, the synthetic "All" first.
    pub fn options() -> Vec<FilterOption> {
        std::iter::once(FilterOption::All)
            .chain(TopicStatus::ALL.into_iter().map(FilterOption::Status))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterOption::All => "All",
            FilterOption::Status(status) => status.label(),
        }
    }
}

/// Combined filter state: the dropdown selection plus an optional single
/// status imposed from outside the table (a status tile).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    selection: StatusSelection,
    external: Option<TopicStatus>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(statuses: impl IntoIterator<Item = TopicStatus>) -> Self {
        Self {
            selection: StatusSelection::from_statuses(statuses),
            external: None,
        }
    }

    pub fn with_external(mut self, status: TopicStatus) -> Self {
        self.external = Some(status);
        self
    }

    pub fn selection(&self) -> &StatusSelection {
        &self.selection
    }

    pub fn external(&self) -> Option<TopicStatus> {
        self.external
    }

    /// True when no filtering at all applies.
    pub fn is_default_view(&self) -> bool {
        self.external.is_none() && self.selection.is_all()
    }

    pub fn set_selection(&mut self, statuses: impl IntoIterator<Item = TopicStatus>) {
        self.selection = StatusSelection::from_statuses(statuses);
    }

    /// Toggle one status in the dropdown. From the default view this starts
    /// a selection containing only `status`.
    pub fn toggle_status(&mut self, status: TopicStatus) {
        let mut set = match std::mem::take(&mut self.selection) {
            StatusSelection::All => BTreeSet::new(),
            StatusSelection::Only(set) => set,
        };

        if !set.remove(&status) {
            set.insert(status);
        }

        self.selection = StatusSelection::normalize(set);
    }

    /// Toggle the synthetic "All" entry. Selecting and clearing everything are
    /// the same view, so both land on the default view.
    pub fn toggle_all(&mut self) {
        self.selection = StatusSelection::All;
    }

    pub fn toggle(&mut self, option: FilterOption) {
        match option {
            FilterOption::All => self.toggle_all(),
            FilterOption::Status(status) => self.toggle_status(status),
        }
    }

    /// Whether the dropdown shows a tick next to `option`.
    pub fn is_checked(&self, option: FilterOption) -> bool {
        match (option, &self.selection) {
            (FilterOption::All, selection) => selection.is_all(),
            (FilterOption::Status(_), StatusSelection::All) => false,
            (FilterOption::Status(status), StatusSelection::Only(set)) => set.contains(&status),
        }
    }

    /// Tile click: the same status twice clears the external filter.
    pub fn toggle_external(&mut self, status: TopicStatus) {
        self.external = if self.external == Some(status) {
            None
        } else {
            Some(status)
        };
    }

    pub fn clear_external(&mut self) {
        self.external = None;
    }

    /// Whether a row with `status` is visible. The external filter, when set,
    /// replaces the dropdown selection entirely.
    pub fn matches(&self, status: Option<TopicStatus>) -> bool {
        match (self.external, &self.selection) {
            (Some(external), _) => status == Some(external),
            (None, StatusSelection::All) => true,
            (None, selection) => status.is_some_and(|s| selection.contains(s)),
        }
    }
}

/// Rows visible under `filter`, in input order.
pub fn visible_rows<'a, T>(
    rows: impl IntoIterator<Item = &'a T>,
    filter: &FilterState,
) -> Vec<&'a T>
where
    T: HasStatus + 'a,
{
    rows.into_iter()
        .filter(|row| filter.matches(row.status()))
        .collect()
}
