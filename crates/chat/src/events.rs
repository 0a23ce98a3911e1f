use crate::message::MessageId;
use crate::theme::ThemeMode;

/// Emitted by the composer view whenever the input text changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftChanged {
    pub text: String,
}

/// Emitted when the user activates the send trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SendRequested;

/// Emitted after a message has been committed to the transcript.
///
/// Auto-scroll hangs off this event rather than the append itself, so a
/// session driven without subscribers never scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageAppended {
    pub id: MessageId,
    pub index: usize,
}

/// Emitted when the theme mode flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThemeChanged {
    pub mode: ThemeMode,
}

impl DraftChanged {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
