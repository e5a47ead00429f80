use hypodesk_types::{RowStatus, TopicStatus};
use is_terminal::IsTerminal;
use once_cell::sync::Lazy;
use owo_colors::OwoColorize;

static COLOR_ENABLED: Lazy<bool> =
    Lazy::new(|| std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal());

pub fn color_enabled() -> bool {
    *COLOR_ENABLED
}

pub fn bold(text: &str) -> String {
    if color_enabled() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn dimmed(text: &str) -> String {
    if color_enabled() {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

pub fn command(text: &str) -> String {
    if color_enabled() {
        text.cyan().to_string()
    } else {
        text.to_string()
    }
}

/// Status label padded to `width` before colouring so columns stay aligned.
pub fn status(status: TopicStatus, width: usize) -> String {
    let padded = format!("{:<width$}", status.label(), width = width);
    if !color_enabled() {
        return padded;
    }
    match status {
        TopicStatus::Draft => padded.yellow().to_string(),
        TopicStatus::Submitted => padded.blue().to_string(),
        TopicStatus::Reviewed => padded.magenta().to_string(),
        TopicStatus::Approved => padded.green().to_string(),
    }
}

/// Like [`status`]; a label the desk does not track is shown dimmed.
pub fn row_status(status: &RowStatus, width: usize) -> String {
    match status.tracked() {
        Some(tracked) => self::status(tracked, width),
        None => dimmed(&format!("{:<width$}", status.label(), width = width)),
    }
}
