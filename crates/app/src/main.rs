use dioxus::prelude::*;
use shared_ui::theme::{ThemeMode, ThemeSeed, ThemeState};

mod auth;
mod format_helpers;
mod routes;
use auth::AuthState;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = platform::load_config();
    tracing::info!(
        demo_hint = config.features.demo_hint,
        notifications = config.features.notifications,
        "configuration loaded"
    );

    use_context_provider(|| config.features.clone());
    use_context_provider(|| AuthState::new(config));
    use_context_provider(|| ThemeState::new(Signal::new(ThemeMode::default())));

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        ThemeSeed {}
        Router::<Route> {}
    }
}
