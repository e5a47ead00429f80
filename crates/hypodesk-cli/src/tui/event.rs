use hypodesk_types::Topic;

/// Messages from background work to the draw loop.
pub(crate) enum AppEvent {
    /// Outcome of a topic reload; the error is already user-facing text.
    Reloaded(Result<Vec<Topic>, String>),
}
