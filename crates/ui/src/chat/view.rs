use gpui::*;
use gpui_component::{ActiveTheme, v_flex};
use murmur_chat::{
    ChatSession, ChatSettings, DraftChanged, MessageAppended, SendRequested, ThemeChanged,
};

use crate::chat::{MessageInput, MessageList};
use crate::theme::ThemeState;

/// Coordinator between the composer, the session, and the transcript view.
///
/// The session entity is the only owner of the transcript; the message list
/// observes it.
pub struct ChatView {
    session: Entity<ChatSession>,
    message_list: Entity<MessageList>,
    message_input: Entity<MessageInput>,
}

impl EventEmitter<MessageAppended> for ChatView {}

impl ChatView {
    pub fn new(
        settings: &ChatSettings,
        theme: &Entity<ThemeState>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let session = cx.new(|_| ChatSession::new());
        let message_list = cx.new(|cx| MessageList::new(settings, session.clone(), cx));
        let message_input = cx.new(|cx| MessageInput::new(settings, window, cx));

        cx.subscribe(&message_input, |this, _, event: &DraftChanged, cx| {
            this.session.update(cx, |session, _| {
                session.update_draft(event.text.clone());
            });
        })
        .detach();

        cx.subscribe_in(
            &message_input,
            window,
            |this, _, _event: &SendRequested, window, cx| {
                this.send(window, cx);
            },
        )
        .detach();

        // Bubble and border colors come from the global theme.
        cx.subscribe(theme, |this, _, event: &ThemeChanged, cx| {
            tracing::debug!(mode = %event.mode, "restyling chat view");
            this.message_list.update(cx, |_, cx| cx.notify());
            cx.notify();
        })
        .detach();

        Self {
            session,
            message_list,
            message_input,
        }
    }

    pub fn message_list(&self) -> &Entity<MessageList> {
        &self.message_list
    }

    /// Sends the current draft. Blank drafts are ignored without feedback.
    ///
    /// A successful send emits [`MessageAppended`]; scrolling is left to
    /// whoever subscribes to it.
    fn send(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(appended) = commit_draft(&self.session, cx) else {
            return;
        };

        self.message_input.update(cx, |input, cx| {
            input.clear(window, cx);
        });

        tracing::info!(
            id = %appended.id,
            count = self.session.read(cx).transcript().len(),
            "message sent"
        );
        cx.emit(appended);
        cx.notify();
    }
}

/// Commits the session's draft and notifies its observers when a message
/// was appended.
pub fn commit_draft(session: &Entity<ChatSession>, cx: &mut App) -> Option<MessageAppended> {
    session.update(cx, |session, cx| {
        let appended = session.send()?;
        cx.notify();
        Some(appended)
    })
}

impl Render for ChatView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        v_flex()
            .id("chat-view")
            .size_full()
            .min_h_0()
            .overflow_hidden()
            .bg(theme.background)
            .child(
                div()
                    .id("chat-view-message-list")
                    .flex_1()
                    .min_h_0()
                    .child(self.message_list.clone()),
            )
            .child(
                div()
                    .id("chat-view-message-input")
                    .flex_shrink_0()
                    .w_full()
                    .border_t_1()
                    .border_color(theme.border)
                    .child(self.message_input.clone()),
            )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn watch(
        session: &Entity<ChatSession>,
        cx: &mut TestAppContext,
    ) -> (Rc<Cell<usize>>, Subscription) {
        let notified = Rc::new(Cell::new(0usize));
        let subscription = cx.update(|cx| {
            let notified = notified.clone();
            cx.observe(session, move |_, _| notified.set(notified.get() + 1))
        });
        (notified, subscription)
    }

    #[gpui::test]
    fn blank_draft_commits_nothing_and_keeps_the_draft(cx: &mut TestAppContext) {
        let session = cx.new(|_| ChatSession::new());
        let (notified, _subscription) = watch(&session, cx);

        let appended = cx.update(|cx| {
            session.update(cx, |session, _| session.update_draft("   \n"));
            commit_draft(&session, cx)
        });

        assert_eq!(appended, None);
        assert_eq!(notified.get(), 0);
        cx.read(|cx| {
            let session = session.read(cx);
            assert!(session.transcript().is_empty());
            assert_eq!(session.draft(), "   \n");
        });
    }

    #[gpui::test]
    fn committed_draft_appends_clears_and_notifies(cx: &mut TestAppContext) {
        let session = cx.new(|_| ChatSession::new());
        let (notified, _subscription) = watch(&session, cx);

        let appended = cx.update(|cx| {
            session.update(cx, |session, _| session.update_draft("hi"));
            commit_draft(&session, cx)
        });

        let appended = appended.expect("non-blank draft appends");
        assert_eq!(appended.index, 0);
        assert_eq!(notified.get(), 1);
        cx.read(|cx| {
            let session = session.read(cx);
            assert_eq!(session.draft(), "");
            assert_eq!(session.transcript().last().map(|m| m.text()), Some("hi"));
            assert_eq!(session.transcript().last().map(|m| m.id()), Some(appended.id));
        });
    }
}
