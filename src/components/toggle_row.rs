use leptos::prelude::*;

/// Checkbox with a clickable label.
#[component]
pub fn ToggleRow(
    /// DOM id tying the label to the checkbox
    id: &'static str,
    label: &'static str,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<bool>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="toggle-row">
            <input
                type="checkbox"
                id=id
                class="checkbox"
                prop:checked=move || checked.get()
                disabled=move || disabled.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
            <label for=id class="toggle-label">{label}</label>
        </div>
    }
}
