use leptos::prelude::*;

use crate::storage::{KeyValueStore, API_BASE_KEY};

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime configuration. The API base is resolved from, in order, the
/// `apiBase` storage override, the `TWINSIM_API_BASE` build variable, and
/// the local default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub log_filter: String,
}

impl AppConfig {
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self {
            api_base: resolve_api_base(store.get_item(API_BASE_KEY), option_env!("TWINSIM_API_BASE")),
            log_filter: option_env!("TWINSIM_LOG")
                .filter(|f| !f.trim().is_empty())
                .unwrap_or(DEFAULT_LOG_FILTER)
                .to_string(),
        }
    }
}

pub fn resolve_api_base(stored: Option<String>, build_time: Option<&str>) -> String {
    let chosen = stored
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| build_time.map(str::trim).filter(|s| !s.is_empty()))
        .unwrap_or(DEFAULT_API_BASE);
    normalize_base(chosen)
}

pub fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

/// Shared through the component tree so the settings page can change the
/// API base for the simulation page.
#[derive(Clone, Copy)]
pub struct ConfigContext {
    pub api_base: ReadSignal<String>,
    pub set_api_base: WriteSignal<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_override_wins() {
        assert_eq!(
            resolve_api_base(Some("http://10.0.0.2:9000/".to_string()), Some("http://build")),
            "http://10.0.0.2:9000"
        );
    }

    #[test]
    fn test_blank_override_falls_through() {
        assert_eq!(resolve_api_base(Some("  ".to_string()), Some("http://build:1/")), "http://build:1");
        assert_eq!(resolve_api_base(None, None), DEFAULT_API_BASE);
        assert_eq!(resolve_api_base(None, Some("")), DEFAULT_API_BASE);
    }
}
