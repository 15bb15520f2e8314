use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::sidebar::Sidebar;
use crate::config::{AppConfig, ConfigContext};
use crate::pages::settings::SettingsPage;
use crate::pages::simulation::SimulationPage;
use crate::storage::BrowserStorage;
use crate::theme::{apply_theme, Theme, ThemeContext};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load(&BrowserStorage);
    let (api_base, set_api_base) = signal(config.api_base);
    provide_context(ConfigContext { api_base, set_api_base });

    let (theme, set_theme) = signal(Theme::load(&BrowserStorage));
    provide_context(ThemeContext { theme, set_theme });

    // Apply theme to DOM whenever the signal changes
    Effect::new(move |_| {
        apply_theme(theme.get());
    });

    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=SimulationPage />
                        <Route path=path!("/simulation") view=SimulationPage />
                        <Route path=path!("/settings") view=SettingsPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
