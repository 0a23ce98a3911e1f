use std::sync::Arc;

use crate::clock::Clock;
use crate::composer::Composer;
use crate::events::MessageAppended;
use crate::message::{Message, MessageIdGenerator};
use crate::transcript::Transcript;

/// Chat state behind one view: the draft, the transcript, and id allocation.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    composer: Composer,
    transcript: Transcript,
    ids: MessageIdGenerator,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            composer: Composer::new(),
            transcript: Transcript::new(),
            ids: MessageIdGenerator::new(clock),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn draft(&self) -> &str {
        self.composer.draft()
    }

    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.composer.update_draft(text);
    }

    /// Commits the current draft to the transcript.
    ///
    /// Returns `None` and leaves everything untouched when the draft is blank.
    /// Otherwise the draft is stored verbatim under a fresh id and cleared.
    pub fn send(&mut self) -> Option<MessageAppended> {
        let Some(text) = self.composer.take_submission() else {
            tracing::debug!(
                draft_len = self.composer.draft().len(),
                "ignored send of blank draft"
            );
            return None;
        };

        let id = self.ids.next_id();
        let index = self.transcript.push(Message::new(id, text));
        tracing::debug!(%id, index, "appended message to transcript");

        Some(MessageAppended { id, index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::message::MessageId;

    fn session_at(millis: u64) -> ChatSession {
        ChatSession::with_clock(Arc::new(FixedClock::new(millis)))
    }

    fn texts(session: &ChatSession) -> Vec<&str> {
        session.transcript().iter().map(Message::text).collect()
    }

    #[test]
    fn new_session_is_empty() {
        let session = ChatSession::new();
        assert!(session.transcript().is_empty());
        assert_eq!(session.draft(), "");
    }

    #[test]
    fn whitespace_only_draft_is_ignored() {
        let mut session = session_at(1);
        session.update_draft("   ");

        assert_eq!(session.send(), None);
        assert!(session.transcript().is_empty());
        assert_eq!(session.draft(), "   ");
    }

    #[test]
    fn empty_draft_is_ignored() {
        let mut session = session_at(1);
        assert_eq!(session.send(), None);
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn send_appends_verbatim_text_and_clears_draft() {
        let mut session = session_at(7_000);
        session.update_draft("  hi there ");

        let appended = session.send().expect("non-blank draft should send");
        assert_eq!(appended.index, 0);
        assert_eq!(appended.id, MessageId::new(7_000));
        assert_eq!(texts(&session), vec!["  hi there "]);
        assert_eq!(session.draft(), "");
    }

    #[test]
    fn sends_keep_order_and_unique_ids() {
        let mut session = session_at(100);

        session.update_draft("a");
        let first = session.send().expect("first send");
        session.update_draft("b");
        let second = session.send().expect("second send");

        assert_eq!(texts(&session), vec!["a", "b"]);
        assert_eq!((first.index, second.index), (0, 1));
        assert!(second.id > first.id);
    }

    #[test]
    fn multiline_message_keeps_line_break() {
        let mut session = session_at(1);
        session.update_draft("Hello\nWorld");
        session.send().expect("multiline send");

        let stored = session.transcript().last().expect("one message");
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(stored.text(), "Hello\nWorld");
        assert_eq!(stored.display_lines(), vec!["Hello", "World"]);
    }

    #[test]
    fn rejected_send_does_not_consume_an_id() {
        let mut session = session_at(50);
        session.update_draft(" ");
        session.send();
        session.update_draft("x");

        let appended = session.send().expect("send after rejected one");
        assert_eq!(appended.id, MessageId::new(50));
    }
}
