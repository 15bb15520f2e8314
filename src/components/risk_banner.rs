use leptos::prelude::*;

use crate::results::RiskLevel;

pub fn card_class(risk: RiskLevel) -> String {
    format!("card risk-card border-{} shadow-{}", risk.tone(), risk.tone())
}

pub fn banner_class(risk: RiskLevel) -> String {
    format!("risk-banner border-{} bg-{}", risk.tone(), risk.tone())
}

/// "Final Health Prediction" card: final organ load, risk label, and the
/// summary sentence for the projection horizon.
#[component]
pub fn RiskBanner(risk: RiskLevel, final_organ_load: u8, years: u32) -> impl IntoView {
    view! {
        <div class=card_class(risk)>
            <h3 class="card-title">"Final Health Prediction"</h3>
            <div class="prediction-row">
                <span class="prediction-name">"Final Organ Load Score"</span>
                <span class="prediction-value text-warning">{final_organ_load}</span>
            </div>
            <div class="prediction-row">
                <span class="prediction-name">"Risk Level"</span>
                <span class=format!("prediction-value risk-label text-{}", risk.tone())>
                    {risk.label()}
                </span>
            </div>
            <div class=banner_class(risk)>
                <p class="risk-summary">{risk.summary(years)}</p>
            </div>
        </div>
    }
}
