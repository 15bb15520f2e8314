use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"Digital Twin"</h1>
                <p class="sidebar-subtitle">"Future Health Simulation"</p>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/simulation" class="nav-link">"Simulation"</a>
                </li>
                <li class="nav-item">
                    <a href="/settings" class="nav-link">"Settings"</a>
                </li>
            </ul>
        </nav>
    }
}
