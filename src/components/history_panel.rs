//! Past simulation runs for the current user.
//!
//! Lists what the backend has stored for this user and lets a run be
//! reopened in the results view.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{HttpTransport, SimulationClient};
use crate::results::HistoryEntry;

/// History panel for the simulation page.
///
/// Reloads whenever `refresh` changes (after each successful run) or the
/// API base is edited in settings.
#[component]
pub fn HistoryPanel(
    /// Logged-in user, `None` when no session is stored.
    user_id: Option<i64>,
    api_base: ReadSignal<String>,
    refresh: ReadSignal<u32>,
    /// Invoked with the simulation id when the user clicks View.
    on_view: Callback<i64>,
) -> impl IntoView {
    let (entries, set_entries) = signal::<Option<Vec<HistoryEntry>>>(None);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let _ = refresh.get();
        let base = api_base.get();
        let Some(uid) = user_id else {
            return;
        };
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let client = SimulationClient::new(HttpTransport::new(), &base);
            match client.history(uid).await {
                Ok(list) => set_entries.set(Some(list)),
                Err(e) => set_error.set(Some(format!("Could not load history: {}", e))),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="card history-panel">
            <style>{include_str!("history_panel.css")}</style>
            <h3 class="card-title">"Past Simulations"</h3>

            {move || {
                if user_id.is_none() {
                    view! { <p class="history-empty">"Log in to see past simulations."</p> }.into_any()
                } else if loading.get() {
                    view! { <p class="history-loading">"Loading history..."</p> }.into_any()
                } else if let Some(err) = error.get() {
                    view! { <p class="history-error">{err}</p> }.into_any()
                } else if let Some(list) = entries.get() {
                    if list.is_empty() {
                        view! { <p class="history-empty">"No simulations yet."</p> }.into_any()
                    } else {
                        view! {
                            <div class="history-list">
                                {list.iter().map(|entry| {
                                    let id = entry.id;
                                    let years = entry
                                        .duration_years
                                        .map(|y| format!("{} years", y))
                                        .unwrap_or_else(|| "unknown period".to_string());
                                    let risk = entry.risk_level();
                                    view! {
                                        <div class="history-item">
                                            <div class="history-item-info">
                                                <span class="history-id">{format!("#{}", id)}</span>
                                                <span class="history-years">{years}</span>
                                                {risk.map(|r| view! {
                                                    <span class=format!("history-risk text-{}", r.tone())>{r.label()}</span>
                                                })}
                                            </div>
                                            <button
                                                class="btn btn-small btn-secondary"
                                                on:click=move |_| on_view.run(id)
                                            >
                                                "View"
                                            </button>
                                        </div>
                                    }
                                }).collect::<Vec<_>>()}
                            </div>
                        }.into_any()
                    }
                } else {
                    view! { <p class="history-empty">"No data"</p> }.into_any()
                }
            }}
        </div>
    }
}
