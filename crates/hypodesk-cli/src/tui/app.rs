use crossterm::event::KeyCode;
use hypodesk_engine::{ActivityFeed, FilterOption, TopicColumn, TopicsTable};
use hypodesk_types::{Topic, TopicStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Table,
    Feed,
}

/// What the draw loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    None,
    Reload,
    Quit,
}

pub(crate) struct App {
    pub table: TopicsTable,
    pub feed: ActivityFeed,
    pub user_name: String,
    pub focus: Focus,
    /// Row highlighted on the current table page
    pub selected_row: usize,
    /// Column `s` sorts by
    pub sort_column: usize,
    /// Entry of the status dropdown `space` toggles
    pub filter_cursor: usize,
    /// Card highlighted on the current feed page
    pub selected_card: usize,
    pub loading: bool,
    pub status_line: Option<String>,
}

impl App {
    pub fn new(table: TopicsTable, feed: ActivityFeed, user_name: String) -> Self {
        Self {
            table,
            feed,
            user_name,
            focus: Focus::Table,
            selected_row: 0,
            sort_column: 0,
            filter_cursor: 0,
            selected_card: 0,
            loading: false,
            status_line: None,
        }
    }

    pub fn highlighted_column(&self) -> TopicColumn {
        TopicColumn::ALL[self.sort_column % TopicColumn::ALL.len()]
    }

    pub fn filter_options(&self) -> Vec<FilterOption> {
        FilterOption::options()
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            KeyCode::Char('r') => {
                if self.loading {
                    self.status_line = Some("A reload is already running".to_string());
                    return Action::None;
                }
                return Action::Reload;
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Table => Focus::Feed,
                    Focus::Feed => Focus::Table,
                };
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.table.toggle_tile(TopicStatus::ALL[index]);
                self.selected_row = 0;
            }
            KeyCode::Char('0') => {
                self.table.clear_tile();
                self.selected_row = 0;
            }
            KeyCode::Char('c') => {
                self.sort_column = (self.sort_column + 1) % TopicColumn::ALL.len();
            }
            KeyCode::Char('s') => self.table.cycle_sort(self.highlighted_column()),
            KeyCode::Char('d') => self.table.cycle_sort(TopicColumn::UpdatedAt),
            KeyCode::Char('f') => {
                self.filter_cursor = (self.filter_cursor + 1) % self.filter_options().len();
            }
            KeyCode::Char(' ') => {
                if let Some(option) = self.filter_options().get(self.filter_cursor).copied() {
                    self.table.toggle_filter(option);
                    self.selected_row = 0;
                }
            }
            KeyCode::Char('a') => {
                self.table.toggle_filter(FilterOption::All);
                self.selected_row = 0;
            }
            KeyCode::Left => match self.focus {
                Focus::Table => {
                    self.table.prev_page();
                    self.selected_row = 0;
                }
                Focus::Feed => {
                    self.feed.prev();
                    self.selected_card = 0;
                }
            },
            KeyCode::Right => match self.focus {
                Focus::Table => {
                    self.table.next_page();
                    self.selected_row = 0;
                }
                Focus::Feed => {
                    self.feed.next();
                    self.selected_card = 0;
                }
            },
            KeyCode::Up | KeyCode::Char('k') => match self.focus {
                Focus::Table => self.selected_row = self.selected_row.saturating_sub(1),
                Focus::Feed => self.selected_card = self.selected_card.saturating_sub(1),
            },
            KeyCode::Down | KeyCode::Char('j') => match self.focus {
                Focus::Table => self.selected_row += 1,
                Focus::Feed => self.selected_card += 1,
            },
            KeyCode::Char('e') | KeyCode::Enter if self.focus == Focus::Feed => {
                if let Some(index) = self.feed.global_index(self.selected_card) {
                    self.feed.toggle_expand(index);
                }
            }
            _ => {}
        }

        self.clamp_selection();
        Action::None
    }

    fn clamp_selection(&mut self) {
        let rows = self.table.view().rows.len();
        self.selected_row = self.selected_row.min(rows.saturating_sub(1));

        let cards = self.feed.cards().len();
        self.selected_card = self.selected_card.min(cards.saturating_sub(1));
    }

    pub fn begin_reload(&mut self) {
        self.loading = true;
        self.status_line = Some("Reloading topics...".to_string());
    }

    pub fn apply_reload(&mut self, result: Result<Vec<Topic>, String>) {
        self.loading = false;
        match result {
            Ok(topics) => {
                let count = topics.len();
                self.table.replace_rows(topics);
                self.status_line = Some(format!("Loaded {} topics", count));
            }
            Err(message) => {
                self.status_line = Some(format!("Reload failed: {}", message));
            }
        }
        self.clamp_selection();
    }
}
