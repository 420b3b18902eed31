use anyhow::Context as _;
use empathyboard::app::EmpathyBoard;
use empathyboard::settings::{Settings, ThemePreference};
use gpui::*;
use gpui_component::Root;
use gpui_component::theme::{Theme, ThemeMode};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load();

    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);

        let mode = match settings.theme {
            ThemePreference::Light => ThemeMode::Light,
            ThemePreference::Dark => ThemeMode::Dark,
        };
        Theme::change(mode, None, cx);

        let bounds = Bounds::centered(None, size(px(960.0), px(1120.0)), cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some("Empathy Board".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx
            .open_window(options, |window, cx| {
                let view = cx.new(|cx| EmpathyBoard::new(settings, window, cx));
                cx.new(|cx| Root::new(view, window, cx))
            })
            .context("opening main window");

        if let Err(e) = opened {
            tracing::error!("{:#}", e);
            cx.quit();
            return;
        }
        cx.activate(true);
    });
}
