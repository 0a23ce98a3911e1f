use gpui::*;
use gpui_component::Root;
use tracing_subscriber::EnvFilter;

use murmur::app::{AppShell, Quit, ToggleTheme, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};
use murmur_chat::SettingsStore;

/// Application entry point.
///
/// Loads settings before the event loop starts, initializes gpui-component,
/// registers global actions, then opens the single chat window.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings_store = SettingsStore::load();
    let settings = settings_store.settings();
    tracing::info!(
        path = ?settings_store.config_path(),
        theme_mode = %settings.theme_mode,
        "starting murmur"
    );

    let app = Application::new().with_assets(gpui_component_assets::Assets);

    app.run(move |cx| {
        // Required before any Root usage: theme system and component registry.
        gpui_component::init(cx);

        cx.on_action(|_: &Quit, cx| {
            cx.quit();
        });

        cx.bind_keys([
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("cmd-shift-t", ToggleTheme, None),
        ]);

        cx.spawn(async move |cx| {
            cx.update(|cx| {
                let options = WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                        None,
                        size(px(WINDOW_DEFAULT_WIDTH), px(WINDOW_DEFAULT_HEIGHT)),
                        cx,
                    ))),
                    titlebar: Some(TitlebarOptions {
                        title: Some("murmur".into()),
                        ..Default::default()
                    }),
                    ..Default::default()
                };

                // Root is required by gpui-component for input and overlay layers.
                cx.open_window(options, |window, cx| {
                    let shell = cx.new(|cx| AppShell::new(&settings, window, cx));
                    cx.new(|cx| Root::new(shell, window, cx))
                })
                .expect("failed to open main window");

                cx.activate(true);
            })
        })
        .detach();
    });
}
