use leptos::prelude::*;

use crate::storage::{KeyValueStore, THEME_KEY};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::System, Theme::Light, Theme::Dark];

    pub fn from_pref(value: &str) -> Self {
        match value {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::System,
        }
    }

    pub fn as_pref(self) -> &'static str {
        match self {
            Theme::System => "system",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::System => "System",
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn load(store: &impl KeyValueStore) -> Self {
        store
            .get_item(THEME_KEY)
            .map(|v| Theme::from_pref(&v))
            .unwrap_or_default()
    }

    pub fn save(self, store: &impl KeyValueStore) {
        store.set_item(THEME_KEY, self.as_pref());
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    pub set_theme: WriteSignal<Theme>,
}

/// Set or remove the `data-theme` attribute on `<html>`.
/// `System` removes it and leaves the choice to the CSS media query.
pub fn apply_theme(theme: Theme) {
    let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    match theme {
        Theme::Light | Theme::Dark => {
            let _ = html.set_attribute("data-theme", theme.as_pref());
        }
        Theme::System => {
            let _ = html.remove_attribute("data-theme");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_theme_preference_persists() {
        let store = MemoryStore::new();
        assert_eq!(Theme::load(&store), Theme::System);

        Theme::Dark.save(&store);
        assert_eq!(Theme::load(&store), Theme::Dark);

        assert_eq!(Theme::from_pref("sepia"), Theme::System);
    }
}
