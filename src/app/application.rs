//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, Focusable, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, px, size,
};
use tracing::{error, info, warn};

use crate::app::entities::AppEntities;
use crate::components::layout::shell::Shell;
use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::domain::config::AppConfig;
use crate::helpers::{Quit, ToggleLocale, new_key_bindings};
use crate::i18n::t;

/// Load startup config, falling back to defaults on any failure
fn load_config() -> AppConfig {
    match AppConfig::try_load() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            AppConfig::default()
        }
    }
}

/// Run the counter application
pub fn run_app() {
    let config = load_config();
    let locale = config.resolve_locale();
    info!(locale = locale.code(), "Resolved locale");

    Application::new().run(move |cx: &mut App| {
        // Set up action handlers
        cx.bind_keys(new_key_bindings());
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Initialize global entities
        let entities = AppEntities::init(locale, cx);
        cx.set_global(entities.clone());

        let toggle_entities = entities.clone();
        cx.on_action(move |_: &ToggleLocale, cx: &mut App| {
            toggle_entities.i18n.update(cx, |i18n, cx| {
                i18n.toggle_locale();
                cx.notify();
            });
        });

        // Create main window
        let (width, height) = config.window.clamped_size();
        let title = config
            .window
            .title
            .clone()
            .map(SharedString::from)
            .unwrap_or_else(|| t(locale, "app-title"));
        let bounds = Bounds::centered(None, size(px(width), px(height)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(title),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let shell = cx.new(|cx| Shell::new(entities.clone(), cx));
            // Route key bindings to the counter from the first frame
            let focus = shell.read(cx).counter().read(cx).focus_handle(cx);
            window.focus(&focus);
            shell
        });

        match opened {
            Ok(_) => info!(width, height, "Main window opened"),
            Err(e) => {
                error!(error = %e, "Failed to open main window");
                cx.quit();
                return;
            }
        }

        cx.activate(true);
    });
}
