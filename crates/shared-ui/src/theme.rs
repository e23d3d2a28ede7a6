use dioxus::prelude::*;

/// Colour scheme applied through the `data-theme` attribute on `<html>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a stored value; anything unknown is light.
    pub fn from_key(s: &str) -> Self {
        match s.trim() {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// Pull the `theme` entry out of a `document.cookie` string.
pub fn mode_from_cookie(cookie: &str) -> ThemeMode {
    cookie
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == "theme")
        .map(|(_, v)| ThemeMode::from_key(v))
        .unwrap_or_default()
}

/// Theme signal shared through context by the settings page and top bar.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub mode: Signal<ThemeMode>,
}

impl ThemeState {
    pub fn new(mode: Signal<ThemeMode>) -> Self {
        Self { mode }
    }

    pub fn current(&self) -> ThemeMode {
        *self.mode.read()
    }

    pub fn set(&mut self, mode: ThemeMode) {
        self.mode.set(mode);
        set_theme(mode);
    }

    pub fn toggle(&mut self) {
        let next = self.current().toggle();
        self.set(next);
    }
}

/// Apply the theme stored in the cookie once at startup and mirror it into
/// the shared [`ThemeState`], if one is provided.
#[component]
pub fn ThemeSeed() -> Element {
    let state = try_use_context::<ThemeState>();
    use_effect(move || {
        let mut eval = document::eval(
            r#"
            var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
            var theme = match ? match[1] : 'light';
            document.documentElement.setAttribute('data-theme', theme);
            dioxus.send(document.cookie);
            "#,
        );
        if let Some(mut state) = state {
            spawn(async move {
                if let Ok(cookie) = eval.recv::<String>().await {
                    state.mode.set(mode_from_cookie(&cookie));
                }
            });
        }
    });

    rsx! {}
}

/// Persist `mode` to a cookie and update the document.
pub fn set_theme(mode: ThemeMode) {
    let theme = mode.as_str();
    tracing::debug!(theme, "theme changed");
    document::eval(&format!(
        r#"
        document.cookie = 'theme={theme};path=/;max-age=31536000;SameSite=Lax';
        document.documentElement.setAttribute('data-theme', '{theme}');
        "#,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_mode_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn from_key_falls_back_to_light() {
        assert_eq!(ThemeMode::from_key("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_key("cyberpunk"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_key(""), ThemeMode::Light);
    }

    #[test]
    fn toggle_flips_mode() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert!(ThemeMode::Light.toggle().is_dark());
        assert_eq!(ThemeMode::Dark.toggle().toggle(), ThemeMode::Dark);
    }

    #[test]
    fn cookie_parsing_finds_theme_entry() {
        assert_eq!(mode_from_cookie("a=1; theme=dark; b=2"), ThemeMode::Dark);
        assert_eq!(mode_from_cookie("theme=light"), ThemeMode::Light);
        assert_eq!(mode_from_cookie("themes=dark"), ThemeMode::Light);
        assert_eq!(mode_from_cookie(""), ThemeMode::Light);
    }
}
