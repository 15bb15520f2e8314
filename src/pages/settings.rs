use leptos::prelude::*;
use tracing::info;

use crate::config::{resolve_api_base, ConfigContext};
use crate::storage::{BrowserStorage, KeyValueStore, API_BASE_KEY, TWIN_ID_KEY, USER_ID_KEY};
use crate::theme::{Theme, ThemeContext};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let config = expect_context::<ConfigContext>();
    let theme_ctx = expect_context::<ThemeContext>();

    let (base_input, set_base_input) = signal(config.api_base.get_untracked());
    let (base_status, set_base_status) = signal::<Option<String>>(None);

    let save_base = move |_| {
        let raw = base_input.get();
        BrowserStorage.set_item(API_BASE_KEY, raw.trim());
        let resolved = resolve_api_base(Some(raw), option_env!("TWINSIM_API_BASE"));
        info!("API base set to {}", resolved);
        set_base_input.set(resolved.clone());
        config.set_api_base.set(resolved);
        set_base_status.set(Some("API address saved".to_string()));
    };

    let reset_base = move |_| {
        BrowserStorage.remove_item(API_BASE_KEY);
        let resolved = resolve_api_base(None, option_env!("TWINSIM_API_BASE"));
        set_base_input.set(resolved.clone());
        config.set_api_base.set(resolved);
        set_base_status.set(Some("API address reset to default".to_string()));
    };

    let stored = |key: &str| {
        BrowserStorage
            .get_item(key)
            .unwrap_or_else(|| "Not set".to_string())
    };
    let user_id = stored(USER_ID_KEY);
    let twin_id = stored(TWIN_ID_KEY);

    view! {
        <div class="page settings-page">
            <h2>"Settings"</h2>

            <section class="settings-section">
                <h3>"Simulation API"</h3>
                <p class="section-description">"Address of the digital twin backend."</p>

                <div class="form-group">
                    <label for="api-base">"API Address"</label>
                    <div class="input-row">
                        <input
                            id="api-base"
                            type="text"
                            placeholder="http://127.0.0.1:8000"
                            class="input"
                            prop:value=move || base_input.get()
                            on:input=move |ev| {
                                set_base_input.set(event_target_value(&ev));
                            }
                        />
                        <button class="btn btn-save" on:click=save_base>"Save"</button>
                        <button class="btn btn-secondary" on:click=reset_base>"Reset"</button>
                    </div>
                    <Show when=move || base_status.get().is_some()>
                        <span class="status-text">{move || base_status.get().unwrap_or_default()}</span>
                    </Show>
                </div>
            </section>

            <section class="settings-section">
                <h3>"Appearance"</h3>
                <div class="theme-options">
                    {Theme::ALL
                        .iter()
                        .map(|&t| {
                            view! {
                                <button
                                    class="btn btn-outline"
                                    class:active=move || theme_ctx.theme.get() == t
                                    on:click=move |_| {
                                        t.save(&BrowserStorage);
                                        theme_ctx.set_theme.set(t);
                                    }
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="settings-section">
                <h3>"Session"</h3>
                <p class="section-description">
                    "Set when you log in and create your digital twin."
                </p>
                <div class="session-row">
                    <span class="session-name">"User ID"</span>
                    <span class="session-value">{user_id}</span>
                </div>
                <div class="session-row">
                    <span class="session-name">"Twin ID"</span>
                    <span class="session-value">{twin_id}</span>
                </div>
            </section>
        </div>
    }
}
