use leptos::prelude::*;
use tracing::info;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, HttpTransport, SimulationClient};
use crate::components::gauge::Gauge;
use crate::components::history_panel::HistoryPanel;
use crate::components::notice::{Notice, NoticeBar};
use crate::components::risk_banner::RiskBanner;
use crate::components::timeline_chart::TimelineChart;
use crate::components::toggle_row::ToggleRow;
use crate::components::years_picker::YearsPicker;
use crate::config::ConfigContext;
use crate::results::{Metric, ViewResults, ViewState};
use crate::scenario::{
    Environment, EnvironmentFactors, Lifestyle, LifestyleChanges, ScenarioForm, DEFAULT_YEARS,
};
use crate::session::Session;
use crate::storage::BrowserStorage;

const HEART_COLOR: &str = "oklch(0.6 0.2 25)";
const MENTAL_COLOR: &str = "oklch(0.6 0.15 240)";
const ORGAN_COLOR: &str = "oklch(0.75 0.15 85)";

#[component]
pub fn SimulationPage() -> impl IntoView {
    let config = expect_context::<ConfigContext>();

    // Form state
    let (years, set_years) = signal(DEFAULT_YEARS);
    let (lifestyle, set_lifestyle) = signal(LifestyleChanges::default());
    let (environment, set_environment) = signal(EnvironmentFactors::default());

    // Run state
    let (running, set_running) = signal(false);
    let (results, set_results) = signal::<Option<ViewResults>>(None);
    let (notice, set_notice) = signal::<Option<Notice>>(None);
    let (history_refresh, set_history_refresh) = signal(0u32);

    let user_id = Session::load(&BrowserStorage).ok().map(|s| s.user_id);

    let run_simulation = move |_| {
        if running.get_untracked() {
            return;
        }
        let form = ScenarioForm {
            years: years.get_untracked(),
            lifestyle: lifestyle.get_untracked(),
            environment: environment.get_untracked(),
        };
        let base = config.api_base.get_untracked();
        set_notice.set(None);
        set_running.set(true);
        spawn_local(async move {
            let client = SimulationClient::new(HttpTransport::new(), &base);
            match api::submit(&BrowserStorage, &client, &form).await {
                Ok(r) => {
                    set_results.set(Some(r));
                    set_history_refresh.update(|n| *n += 1);
                }
                Err(e) => set_notice.set(Some(Notice::from(&e))),
            }
            set_running.set(false);
        });
    };

    let view_past_run = Callback::new(move |simulation_id: i64| {
        if running.get_untracked() {
            return;
        }
        let base = config.api_base.get_untracked();
        set_notice.set(None);
        set_running.set(true);
        spawn_local(async move {
            let client = SimulationClient::new(HttpTransport::new(), &base);
            match client.fetch_result(simulation_id).await {
                Ok(r) => {
                    info!("Loaded stored simulation {}", simulation_id);
                    if !r.has_results() {
                        set_notice.set(Some(Notice::info(format!(
                            "Simulation #{} has no projection data",
                            simulation_id
                        ))));
                    }
                    set_results.set(Some(r));
                }
                Err(e) => set_notice.set(Some(Notice::from(&e))),
            }
            set_running.set(false);
        });
    });

    view! {
        <div class="page simulation-page">
            <h2>"Future Health Simulation"</h2>
            <p class="page-description">"What will happen to you?"</p>

            <NoticeBar notice=notice set_notice=set_notice />

            <div class="simulation-grid">
                <div class="simulation-controls">
                    <YearsPicker years=years set_years=set_years />

                    <div class="card form-card">
                        <h3 class="card-title">"Lifestyle Changes"</h3>
                        {Lifestyle::ALL
                            .iter()
                            .map(|&item| {
                                view! {
                                    <ToggleRow
                                        id=item.id()
                                        label=item.label()
                                        checked=Signal::derive(move || lifestyle.get().get(item))
                                        on_toggle=Callback::new(move |on: bool| {
                                            set_lifestyle.update(|l| l.set(item, on))
                                        })
                                        disabled=running
                                    />
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <div class="card form-card">
                        <h3 class="card-title">"Environmental Factors"</h3>
                        {Environment::ALL
                            .iter()
                            .map(|&item| {
                                view! {
                                    <ToggleRow
                                        id=item.id()
                                        label=item.label()
                                        checked=Signal::derive(move || environment.get().get(item))
                                        on_toggle=Callback::new(move |on: bool| {
                                            set_environment.update(|e| e.set(item, on))
                                        })
                                        disabled=running
                                    />
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <button
                        class="btn btn-primary btn-run"
                        on:click=run_simulation
                        disabled=move || running.get()
                    >
                        {move || if running.get() { "Running Simulation..." } else { "Run Simulation" }}
                    </button>

                    <HistoryPanel
                        user_id=user_id
                        api_base=config.api_base
                        refresh=history_refresh
                        on_view=view_past_run
                    />
                </div>

                <div class="simulation-results">
                    {move || {
                        let current = results.get();
                        match ViewState::derive(running.get(), current.as_ref()) {
                            ViewState::Running => view! {
                                <div class="card status-card">
                                    <div class="heartbeat">"\u{2764}"</div>
                                    <p class="status-message">"Analyzing your future health..."</p>
                                </div>
                            }
                            .into_any(),
                            ViewState::HasResults => current.map(results_view).into_any(),
                            ViewState::Empty => view! {
                                <div class="card status-card">
                                    <p class="status-message text-muted">
                                        "Configure your simulation parameters and click \"Run Simulation\" to see your future health projection"
                                    </p>
                                </div>
                            }
                            .into_any(),
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

fn results_view(r: ViewResults) -> impl IntoView {
    let heart = r.last_value(Metric::Heart, 75);
    let mental = r.last_value(Metric::Mental, 75);
    let organ_health = 100u8.saturating_sub(r.last_value(Metric::Organ, 25));

    view! {
        <div class="gauge-row">
            <div class="card gauge-card">
                <Gauge value=heart label="Heart Health" color=HEART_COLOR />
            </div>
            <div class="card gauge-card">
                <Gauge value=mental label="Mental Health" color=MENTAL_COLOR />
            </div>
            <div class="card gauge-card">
                <Gauge value=organ_health label="Organ Health" color=ORGAN_COLOR />
            </div>
        </div>

        <div class="card chart-card">
            <h3 class="card-title">"Year-wise Health Projection"</h3>
            <TimelineChart timeline=r.timeline.clone() />
        </div>

        <RiskBanner risk=r.risk_level final_organ_load=r.final_organ_load years=r.years />
    }
}
