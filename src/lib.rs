//! Future health simulation page for the digital twin app.
//!
//! The domain modules (`scenario`, `session`, `api`, `results`) are plain
//! Rust and run anywhere; `app`, `components`, and `pages` are the Leptos
//! front end mounted by [`run`].

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod pages;
pub mod results;
pub mod scenario;
pub mod session;
pub mod storage;
pub mod theme;

pub use api::{submit, HttpReply, HttpTransport, SimulationClient, Transport};
pub use error::{ErrorKind, SimulationError};
pub use results::{RiskLevel, ViewResults, ViewState};
pub use scenario::{ScenarioForm, SimulationRequest};
pub use session::Session;

use tracing::info;

use crate::config::AppConfig;
use crate::storage::BrowserStorage;

pub fn run() {
    let config = AppConfig::load(&BrowserStorage);
    logging::init(&config.log_filter);
    info!("Starting twinsim, API at {}", config.api_base);

    leptos::mount::mount_to_body(app::App);
}
