use clap::ValueEnum;
use hypodesk_engine::TopicColumn;
use hypodesk_types::{AnalysisTab, Competitor, Role, TopicStatus};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum RoleArg {
    User,
    Admin,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::User => Role::User,
            RoleArg::Admin => Role::Admin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StatusArg {
    Draft,
    Submitted,
    Reviewed,
    Approved,
}

impl From<StatusArg> for TopicStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Draft => TopicStatus::Draft,
            StatusArg::Submitted => TopicStatus::Submitted,
            StatusArg::Reviewed => TopicStatus::Reviewed,
            StatusArg::Approved => TopicStatus::Approved,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SortArg {
    Name,
    Summary,
    Status,
    Updated,
}

impl From<SortArg> for TopicColumn {
    fn from(column: SortArg) -> Self {
        match column {
            SortArg::Name => TopicColumn::Name,
            SortArg::Summary => TopicColumn::Summary,
            SortArg::Status => TopicColumn::Status,
            SortArg::Updated => TopicColumn::UpdatedAt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum TabArg {
    Competitors,
    Cms,
    OtherBluePlans,
    SpecialtySociety,
}

impl From<TabArg> for AnalysisTab {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::Competitors => AnalysisTab::Competitors,
            TabArg::Cms => AnalysisTab::Cms,
            TabArg::OtherBluePlans => AnalysisTab::OtherBluePlans,
            TabArg::SpecialtySociety => AnalysisTab::SpecialtySociety,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CompetitorArg {
    All,
    Uhc,
    Cigna,
}

impl CompetitorArg {
    pub fn selected(self) -> Option<Competitor> {
        match self {
            CompetitorArg::All => None,
            CompetitorArg::Uhc => Some(Competitor::Uhc),
            CompetitorArg::Cigna => Some(Competitor::Cigna),
        }
    }
}
