use gpui::*;
use gpui_component::{IconName, Theme, ThemeMode as ComponentThemeMode};
use murmur_chat::{ThemeChanged, ThemeMode, ToggleIcon};

/// Single source of truth for the theme mode.
///
/// The shell creates one and hands it to whatever needs it; every change is
/// pushed into gpui-component's global theme, which the styling reads.
pub struct ThemeState {
    mode: ThemeMode,
}

impl EventEmitter<ThemeChanged> for ThemeState {}

impl ThemeState {
    pub fn new(mode: ThemeMode, window: &mut Window, cx: &mut Context<Self>) -> Self {
        apply_mode(mode, Some(window), cx);
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn toggle(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.mode.toggle();
        apply_mode(self.mode, Some(window), cx);
        tracing::debug!(mode = %self.mode, "toggled theme");

        cx.emit(ThemeChanged { mode: self.mode });
        cx.notify();
    }
}

pub fn apply_mode(mode: ThemeMode, window: Option<&mut Window>, cx: &mut App) {
    Theme::change(component_mode(mode), window, cx);
}

pub fn component_mode(mode: ThemeMode) -> ComponentThemeMode {
    match mode {
        ThemeMode::Light => ComponentThemeMode::Light,
        ThemeMode::Dark => ComponentThemeMode::Dark,
    }
}

pub fn toggle_icon(mode: ThemeMode) -> IconName {
    match mode.toggle_icon() {
        ToggleIcon::Sun => IconName::Sun,
        ToggleIcon::Moon => IconName::Moon,
    }
}
