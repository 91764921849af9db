//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use tg_data::Dataset;
use tg_render::{HoverInfo, TooltipPresenter, ViewMode};

/// Shared application state for Thermogrid chart apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the one-time data load is still running
    pub loading: Signal<bool>,
    /// Error message if the load failed
    pub error_msg: Signal<Option<String>>,
    /// Loaded dataset, used for tooltip detail
    pub dataset: Signal<Option<Dataset>>,
    /// Current view mode
    pub mode: Signal<ViewMode>,
    /// Latest rendered scene as SVG markup
    pub svg: Signal<String>,
    /// Hovered cell, if any
    pub tooltip: Signal<Option<HoverInfo>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            dataset: Signal::new(None),
            mode: Signal::new(ViewMode::default()),
            svg: Signal::new(String::new()),
            tooltip: Signal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Forwards controller hover events into the `tooltip` signal.
pub struct SignalPresenter {
    tooltip: Signal<Option<HoverInfo>>,
}

impl SignalPresenter {
    pub fn new(tooltip: Signal<Option<HoverInfo>>) -> Self {
        Self { tooltip }
    }
}

impl TooltipPresenter for SignalPresenter {
    fn show(&mut self, info: &HoverInfo) {
        self.tooltip.set(Some(info.clone()));
    }

    fn hide(&mut self) {
        self.tooltip.set(None);
    }
}

/// The grid handle type web pages share through context.
pub type WebGrid = crate::grid::GridHandle<SignalPresenter>;
