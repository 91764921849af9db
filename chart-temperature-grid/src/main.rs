//! Monthly Temperature Extremes Grid
//!
//! One column per year (the ten most recent in the data), one row per
//! month. Each cell is colored by the month's hottest day (max-view) or
//! coldest day (min-view) and carries sparklines of the daily highs and
//! lows. Hovering a cell shows its extreme and monthly mean.
//!
//! Data flow:
//! 1. `build.rs` copies `temperatures.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary. If the build had
//!    no fixture, the CSV is fetched from `DATA_URL` instead.
//! 3. The CSV is parsed, windowed and aggregated once into a `Dataset`.
//! 4. The controller re-renders on every resize and mode toggle; the page
//!    swaps in the new SVG.

use dioxus::prelude::*;
use tg_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, ModeToggle, TemperatureGrid,
};
use tg_chart_ui::grid::GridHandle;
use tg_chart_ui::js_bridge;
use tg_chart_ui::state::{AppState, SignalPresenter, WebGrid};
use tg_data::Dataset;
use tg_render::{GridConfig, LoadState};

/// Daily temperatures embedded at build time.
const TEMPERATURES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/temperatures.csv"));

/// Fallback source when nothing was embedded.
const DATA_URL: &str = "temperatures.csv.gz";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("temperature-grid-root"))
        .launch(App);
}

/// Copy the controller's load outcome into the page signals.
fn publish_load(mut state: AppState, grid: &WebGrid) {
    match grid.load_state() {
        LoadState::Ready(dataset) => {
            state.dataset.set(Some(dataset));
            if let Some(svg) = grid.svg() {
                state.svg.set(svg);
            }
        }
        LoadState::Failed(message) => state.error_msg.set(Some(message)),
        LoadState::Pending => {}
    }
    state.loading.set(false);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let grid: WebGrid = use_context_provider(|| {
        GridHandle::new(GridConfig::default(), SignalPresenter::new(state.tooltip))
    });

    // Load once on mount
    let loader = grid.clone();
    use_hook(move || {
        if TEMPERATURES_CSV.trim().is_empty() {
            log::info!("no embedded data, fetching {}", DATA_URL);
            spawn(async move {
                let result = js_bridge::fetch_csv(DATA_URL)
                    .await
                    .and_then(|text| Dataset::from_csv(&text, GridConfig::default().year_window));
                loader.finish_loading(result);
                publish_load(state, &loader);
            });
        } else {
            let window = loader.config().year_window;
            loader.finish_loading(Dataset::from_csv(TEMPERATURES_CSV, window));
            publish_load(state, &loader);
        }
    });

    let subtitle = match (state.mode)() {
        tg_render::ViewMode::Max => "Cells colored by each month's hottest day (0 to 40 °C)",
        tg_render::ViewMode::Min => "Cells colored by each month's coldest day (0 to 40 °C)",
    };

    rsx! {
        div {
            style: "font-family: sans-serif; padding: 16px; max-width: 1200px; margin: 0 auto;",
            ChartHeader {
                title: "Monthly Temperature Extremes".to_string(),
                subtitle: subtitle.to_string(),
            }
            if (state.loading)() {
                LoadingSpinner {}
            } else if let Some(message) = (state.error_msg)() {
                ErrorDisplay { message }
            } else {
                ModeToggle {}
                ChartContainer {
                    TemperatureGrid {}
                }
            }
        }
    }
}
