use gpui::*;
use gpui_component::{
    ActiveTheme, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputEvent, InputState},
};
use murmur_chat::{ChatSettings, DraftChanged, SendRequested};

/// Composer region: multiline input plus the send button.
///
/// The input widget owns the editable text; every edit is mirrored out as
/// [`DraftChanged`] so the session's draft stays the source of truth for
/// sending.
pub struct MessageInput {
    input_state: Entity<InputState>,
    mirror: DraftMirror,
}

impl EventEmitter<DraftChanged> for MessageInput {}
impl EventEmitter<SendRequested> for MessageInput {}

impl MessageInput {
    pub fn new(settings: &ChatSettings, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let placeholder = settings.composer_placeholder.clone();
        let max_rows = settings.composer_max_rows;
        let input_state = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder(placeholder)
                .auto_grow(1, max_rows)
        });

        cx.subscribe_in(
            &input_state,
            window,
            |this, _, event: &InputEvent, window, cx| {
                // Plain Enter inserts a newline; the secondary modifier sends.
                if let InputEvent::PressEnter { secondary: true } = event {
                    this.trim_trailing_newline(window, cx);
                    this.request_send(cx);
                } else {
                    this.sync_draft(cx);
                }
            },
        )
        .detach();

        Self {
            input_state,
            mirror: DraftMirror::default(),
        }
    }

    pub fn clear(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.input_state.update(cx, |state, cx| {
            state.set_value("", window, cx);
        });
        self.mirror.reset();
        cx.notify();
    }

    /// The multiline input has already inserted the newline by the time the
    /// secondary-Enter event arrives.
    fn trim_trailing_newline(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.input_state.update(cx, |state, cx| {
            let value = state.value().to_string();
            let trimmed = strip_submit_newline(&value);
            if trimmed.len() != value.len() {
                state.set_value(trimmed.to_string(), window, cx);
            }
        });
    }

    fn sync_draft(&mut self, cx: &mut Context<Self>) {
        let value = self.input_state.read(cx).value().to_string();
        if let Some(changed) = self.mirror.observe(&value) {
            cx.emit(changed);
        }
    }

    fn request_send(&mut self, cx: &mut Context<Self>) {
        self.sync_draft(cx);
        cx.emit(SendRequested);
    }
}

impl Render for MessageInput {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        h_flex()
            .id("message-input")
            .w_full()
            .items_end()
            .gap_2()
            .p_4()
            .bg(theme.background)
            .child(
                div()
                    .flex_1()
                    .min_w_0()
                    .child(Input::new(&self.input_state).w_full()),
            )
            .child(
                Button::new("send")
                    .small()
                    .primary()
                    .icon(IconName::ArrowUp)
                    .on_click(cx.listener(|this, _, _window, cx| {
                        this.request_send(cx);
                    })),
            )
    }
}

/// Removes the single newline a submit keystroke leaves behind.
fn strip_submit_newline(value: &str) -> &str {
    value.strip_suffix('\n').unwrap_or(value)
}

/// Last value sent out as [`DraftChanged`], so repeated input events with the
/// same text are not re-emitted.
#[derive(Debug, Default)]
struct DraftMirror {
    last: String,
}

impl DraftMirror {
    fn observe(&mut self, value: &str) -> Option<DraftChanged> {
        if value == self.last {
            return None;
        }
        self.last = value.to_string();
        Some(DraftChanged::new(value))
    }

    fn reset(&mut self) {
        self.last.clear();
    }
}
