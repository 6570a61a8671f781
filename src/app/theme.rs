use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Root class picked up by tailwind's class-based dark mode.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn color_scheme(self) -> &'static str {
        self.class()
    }

    /// Label for the control that switches away from this theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Switch to light mode",
            Theme::Light => "Switch to dark mode",
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        log::debug!("theme -> {next:?}");
        self.set_theme.set(next);
    }
}

/// Creates the theme signal (persisted in local storage in the browser) and
/// shares it with the rest of the tree.
///
/// The server always renders `Theme::default()`; the stored value is read
/// only after hydration.
pub fn provide_theme() -> ThemeContext {
    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage_with_options::<Theme, JsonSerdeWasmCodec>(
        STORAGE_KEY,
        UseStorageOptions::default().delay_during_hydration(true),
    );
    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let (theme, set_theme) = signal(Theme::default());
        (Signal::from(theme), set_theme)
    };

    let ctx = ThemeContext { theme, set_theme };
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::default().class(), "dark");
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_first_render_uses_default_theme() {
        let owner = Owner::new();
        owner.set();

        let ctx = provide_theme();
        assert_eq!(ctx.theme.get_untracked(), Theme::Dark);
        assert_eq!(use_theme().theme.get_untracked(), Theme::Dark);

        ctx.toggle();
        assert_eq!(ctx.theme.get_untracked(), Theme::Light);
        ctx.toggle();
        assert_eq!(ctx.theme.get_untracked(), Theme::Dark);
    }

    #[test]
    fn test_stored_form() {
        let stored = serde_json::to_string(&Theme::Light).expect("theme should serialize");
        assert_eq!(stored, "\"Light\"");
        let theme: Theme = serde_json::from_str(&stored).expect("theme should deserialize");
        assert_eq!(theme, Theme::Light);
    }
}
