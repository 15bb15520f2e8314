use leptos::prelude::*;

use crate::scenario::{parse_years, MAX_YEARS, MIN_YEARS, QUICK_YEARS};

/// Number input for the projection horizon plus quick-select buttons.
#[component]
pub fn YearsPicker(years: ReadSignal<u32>, set_years: WriteSignal<u32>) -> impl IntoView {
    view! {
        <div class="card form-card">
            <h3 class="card-title">"Simulation Period"</h3>
            <div class="form-group">
                <label for="years-input">"Number of Years"</label>
                <input
                    id="years-input"
                    type="number"
                    class="input"
                    min=MIN_YEARS.to_string()
                    max=MAX_YEARS.to_string()
                    prop:value=move || years.get().to_string()
                    on:change=move |ev| set_years.set(parse_years(&event_target_value(&ev)))
                />
                <div class="quick-years">
                    {QUICK_YEARS
                        .iter()
                        .map(|&y| {
                            view! {
                                <button
                                    class="btn btn-outline btn-small"
                                    class:active=move || years.get() == y
                                    on:click=move |_| set_years.set(y)
                                >
                                    {format!("{}y", y)}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
