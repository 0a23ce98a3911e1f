use std::time::Instant;

use gpui::*;
use gpui_component::{ActiveTheme, v_flex};
use murmur_chat::{ChatSession, ChatSettings, MessageId, Transcript};

use crate::chat::scroll_manager::ScrollManager;

const BUBBLE_PADDING_X: Pixels = px(14.);
const BUBBLE_PADDING_Y: Pixels = px(10.);

/// Transcript region: one bubble per message, placeholder when empty.
///
/// Reads the transcript straight from the shared session entity and
/// re-renders whenever the session notifies.
pub struct MessageList {
    session: Entity<ChatSession>,
    empty_text: SharedString,
    scroll_manager: ScrollManager,
}

impl MessageList {
    pub fn new(
        settings: &ChatSettings,
        session: Entity<ChatSession>,
        cx: &mut Context<Self>,
    ) -> Self {
        cx.observe(&session, |_, _, cx| cx.notify()).detach();

        Self {
            session,
            empty_text: SharedString::from(settings.empty_transcript_text.clone()),
            scroll_manager: ScrollManager::new(settings),
        }
    }

    /// Auto-scroll hook, run after each committed append.
    pub fn request_scroll_to_latest(&mut self, cx: &mut Context<Self>) {
        self.scroll_manager.request_scroll_to_latest();
        cx.notify();
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.scroll_manager.has_pending_scroll()
    }

    fn render_placeholder(text: &str, cx: &App) -> AnyElement {
        let theme = cx.theme();

        div()
            .id("message-list-empty")
            .w_full()
            .text_sm()
            .text_color(theme.muted_foreground)
            .child(SharedString::from(text.to_string()))
            .into_any_element()
    }

    fn render_bubble(id: MessageId, lines: &[&str], cx: &App) -> AnyElement {
        let theme = cx.theme();

        v_flex()
            .id(ElementId::Name(SharedString::from(format!("message-{id}"))))
            .w_full()
            .px(BUBBLE_PADDING_X)
            .py(BUBBLE_PADDING_Y)
            .rounded_lg()
            .bg(theme.muted)
            .text_sm()
            .text_color(theme.foreground)
            .children(
                lines
                    .iter()
                    .map(|line| div().w_full().child(line_label(line))),
            )
            .into_any_element()
    }
}

impl Render for MessageList {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.scroll_manager.apply_pending_scroll(Instant::now()) {
            window.request_animation_frame();
        }

        let cx = &*cx;
        let transcript = self.session.read(cx).transcript();
        let content = rows(transcript, &self.empty_text)
            .into_iter()
            .map(|row| match row {
                Row::Placeholder(text) => Self::render_placeholder(text, cx),
                Row::Bubble { id, lines } => Self::render_bubble(id, &lines, cx),
            })
            .collect::<Vec<_>>();

        div()
            .id("message-list")
            .size_full()
            .min_h_0()
            .overflow_y_scroll()
            .track_scroll(self.scroll_manager.handle())
            .child(v_flex().w_full().p_4().gap_3().children(content))
    }
}

/// What the list shows, before styling.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Row<'a> {
    Placeholder(&'a str),
    Bubble { id: MessageId, lines: Vec<&'a str> },
}

fn rows<'a>(transcript: &'a Transcript, empty_text: &'a str) -> Vec<Row<'a>> {
    if transcript.is_empty() {
        return vec![Row::Placeholder(empty_text)];
    }

    transcript
        .iter()
        .map(|message| Row::Bubble {
            id: message.id(),
            lines: message.display_lines(),
        })
        .collect()
}

/// Empty lines still take up a row.
fn line_label(line: &str) -> SharedString {
    if line.is_empty() {
        SharedString::from(" ")
    } else {
        SharedString::from(line.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::chat::view::commit_draft;

    const EMPTY: &str = "No hay mensajes aún";

    fn lines_of<'a>(rows: &[Row<'a>]) -> Vec<Vec<&'a str>> {
        rows.iter()
            .filter_map(|row| match row {
                Row::Bubble { lines, .. } => Some(lines.clone()),
                Row::Placeholder(_) => None,
            })
            .collect()
    }

    #[::core::prelude::v1::test]
    fn empty_lines_render_as_a_space() {
        assert_eq!(line_label("").as_ref(), " ");
        assert_eq!(line_label("  keep  ").as_ref(), "  keep  ");
    }

    #[::core::prelude::v1::test]
    fn empty_transcript_shows_only_the_placeholder() {
        let session = ChatSession::new();

        assert_eq!(rows(session.transcript(), EMPTY), vec![Row::Placeholder(EMPTY)]);
    }

    #[::core::prelude::v1::test]
    fn messages_replace_the_placeholder_in_order() {
        let mut session = ChatSession::new();
        for text in ["a", "Hello\nWorld"] {
            session.update_draft(text);
            session.send();
        }

        let rows = rows(session.transcript(), EMPTY);

        assert!(!rows.contains(&Row::Placeholder(EMPTY)));
        assert_eq!(lines_of(&rows), vec![vec!["a"], vec!["Hello", "World"]]);
    }

    #[gpui::test]
    fn list_reads_the_shared_session_after_a_send(cx: &mut TestAppContext) {
        let settings = ChatSettings::default();
        let session = cx.new(|_| ChatSession::new());
        let list = cx.new(|cx| MessageList::new(&settings, session.clone(), cx));

        let notified = Rc::new(Cell::new(0usize));
        let _observer = cx.update(|cx| {
            let notified = notified.clone();
            cx.observe(&list, move |_, _| notified.set(notified.get() + 1))
        });

        cx.update(|cx| {
            session.update(cx, |session, _| session.update_draft("hi"));
            commit_draft(&session, cx);
        });

        assert!(notified.get() > 0);
        cx.read(|cx| {
            let list = list.read(cx);
            let transcript = list.session.read(cx).transcript();
            assert_eq!(lines_of(&rows(transcript, EMPTY)), vec![vec!["hi"]]);
        });
    }
}
