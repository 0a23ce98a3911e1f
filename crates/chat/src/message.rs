use std::fmt;
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};

/// Stable identifier for one message.
///
/// Ids are creation timestamps in milliseconds, bumped forward when needed so
/// they stay strictly increasing within one generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub u64);

impl MessageId {
    /// Creates a typed message identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// One sent message. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: MessageId,
    text: String,
}

impl Message {
    pub(crate) fn new(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    /// Text exactly as it was typed, surrounding whitespace included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Splits the text into the lines a bubble renders.
    ///
    /// A trailing newline produces a trailing empty line; `\r\n` endings are
    /// treated like `\n`.
    pub fn display_lines(&self) -> Vec<&str> {
        self.text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect()
    }
}

/// Allocates strictly increasing, timestamp-derived message ids.
#[derive(Debug, Clone)]
pub struct MessageIdGenerator {
    clock: Arc<dyn Clock>,
    last: Option<u64>,
}

impl MessageIdGenerator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock, last: None }
    }

    /// Returns `max(now, last + 1)` so two allocations in one clock tick, or a
    /// clock stepping backwards, never reuse an id.
    pub fn next_id(&mut self) -> MessageId {
        let now = self.clock.now_millis();
        let raw = match self.last {
            Some(last) if now <= last => last.saturating_add(1),
            _ => now,
        };
        self.last = Some(raw);
        MessageId::new(raw)
    }
}

impl Default for MessageIdGenerator {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}
