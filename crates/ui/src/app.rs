use gpui::*;
use gpui_component::{
    ActiveTheme, Sizable,
    button::{Button, ButtonVariants},
    h_flex, v_flex,
};
use murmur_chat::{ChatSettings, MessageAppended, ThemeChanged};

use crate::chat::{ChatView, MessageList};
use crate::theme::{ThemeState, toggle_icon};

/// Initial window size; the content column is capped by `content_max_width`.
pub const WINDOW_DEFAULT_WIDTH: f32 = 640.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;

gpui::actions!(shell, [ToggleTheme, Quit]);

/// Root view: header with the theme toggle above the chat view.
pub struct AppShell {
    theme: Entity<ThemeState>,
    chat_view: Entity<ChatView>,
    content_max_width: Pixels,
}

impl AppShell {
    pub fn new(settings: &ChatSettings, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let theme = cx.new(|cx| ThemeState::new(settings.theme_mode, window, cx));
        let chat_view = cx.new(|cx| ChatView::new(settings, &theme, window, cx));

        // Auto-scroll is wired here, outside the send path.
        let message_list = chat_view.read(cx).message_list().clone();
        scroll_on_append(&chat_view, message_list, cx).detach();

        // The header icon follows the mode.
        cx.subscribe(&theme, |_, _, _event: &ThemeChanged, cx| cx.notify())
            .detach();

        Self {
            theme,
            chat_view,
            content_max_width: px(settings.content_max_width),
        }
    }

    fn toggle_theme(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.theme.update(cx, |theme, cx| theme.toggle(window, cx));
    }

    fn render_header(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let icon = toggle_icon(self.theme.read(cx).mode());

        h_flex()
            .id("app-header")
            .w_full()
            .flex_shrink_0()
            .justify_center()
            .p_4()
            .bg(theme.background)
            .child(
                Button::new("theme-toggle")
                    .ghost()
                    .small()
                    .icon(icon)
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.toggle_theme(window, cx);
                    })),
            )
    }
}

/// Requests a scroll to the newest message whenever `source` reports an
/// append.
pub fn scroll_on_append<E>(
    source: &Entity<E>,
    list: Entity<MessageList>,
    cx: &mut App,
) -> Subscription
where
    E: EventEmitter<MessageAppended> + 'static,
{
    cx.subscribe(source, move |_, _event: &MessageAppended, cx| {
        list.update(cx, |list, cx| list.request_scroll_to_latest(cx));
    })
}

impl Render for AppShell {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        div()
            .id("app-shell")
            .size_full()
            .flex()
            .justify_center()
            .bg(theme.background)
            .text_color(theme.foreground)
            .on_action(cx.listener(|this, _: &ToggleTheme, window, cx| {
                this.toggle_theme(window, cx);
            }))
            .child(
                v_flex()
                    .h_full()
                    .w_full()
                    .max_w(self.content_max_width)
                    .min_h_0()
                    .child(self.render_header(cx))
                    .child(
                        div()
                            .id("app-main")
                            .flex_1()
                            .min_h_0()
                            .w_full()
                            .child(self.chat_view.clone()),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use murmur_chat::{ChatSession, MessageId};

    use super::*;

    struct AppendSource;

    impl EventEmitter<MessageAppended> for AppendSource {}

    #[gpui::test]
    fn append_requests_a_scroll_on_the_list(cx: &mut TestAppContext) {
        let settings = ChatSettings::default();
        let session = cx.new(|_| ChatSession::new());
        let list = cx.new(|cx| MessageList::new(&settings, session, cx));
        let source = cx.new(|_| AppendSource);

        let _subscription = cx.update(|cx| scroll_on_append(&source, list.clone(), cx));
        assert!(!cx.read(|cx| list.read(cx).has_pending_scroll()));

        source.update(cx, |_, cx| {
            cx.emit(MessageAppended {
                id: MessageId::new(1),
                index: 0,
            });
        });

        assert!(cx.read(|cx| list.read(cx).has_pending_scroll()));
    }

    #[gpui::test]
    fn dropped_subscription_stops_scrolling(cx: &mut TestAppContext) {
        let settings = ChatSettings::default();
        let session = cx.new(|_| ChatSession::new());
        let list = cx.new(|cx| MessageList::new(&settings, session, cx));
        let source = cx.new(|_| AppendSource);

        drop(cx.update(|cx| scroll_on_append(&source, list.clone(), cx)));
        source.update(cx, |_, cx| {
            cx.emit(MessageAppended {
                id: MessageId::new(1),
                index: 0,
            });
        });

        assert!(!cx.read(|cx| list.read(cx).has_pending_scroll()));
    }
}
