//! View-mode state, hover dispatch and re-render triggers.
//!
//! The [`Controller`] is the event-driven shell around the pure renderer.
//! It caches the layout for the current surface size and the scene for the
//! current mode, and answers pointer events by hit-testing that scene.
//! Nothing here mutates the dataset.

use crate::config::GridConfig;
use crate::geometry::Size;
use crate::layout::Layout;
use crate::renderer::render;
use crate::resize::{ResizeHub, Subscription};
use crate::scene::Scene;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tg_core::TgError;
use tg_data::{Cell, Dataset};
use tg_utils::dates::format_year_month;
use tg_utils::format::format_temperature;

/// Which per-cell extreme drives color and tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Max,
    Min,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Max => ViewMode::Min,
            ViewMode::Min => ViewMode::Max,
        }
    }

    /// Short label used in tooltips.
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Max => "max",
            ViewMode::Min => "min",
        }
    }

    /// Heading for the mode, e.g. on a toggle button.
    pub fn title(self) -> &'static str {
        match self {
            ViewMode::Max => "Max Temperature",
            ViewMode::Min => "Min Temperature",
        }
    }

    /// The cell statistic this mode encodes: the hottest day in max-view,
    /// the coldest day in min-view.
    pub fn value_of(self, cell: &Cell) -> Option<f64> {
        match self {
            ViewMode::Max => cell.extreme_max,
            ViewMode::Min => cell.extreme_min,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" => Ok(ViewMode::Max),
            "min" => Ok(ViewMode::Min),
            other => Err(format!("unknown view mode '{other}', expected max or min")),
        }
    }
}

/// What the tooltip shows for a hovered cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverInfo {
    pub year: i32,
    pub month: u32,
    pub value: Option<f64>,
    pub label: &'static str,
    /// Pointer position in surface coordinates.
    pub x: f64,
    pub y: f64,
}

impl HoverInfo {
    pub fn new(cell: &Cell, mode: ViewMode, x: f64, y: f64) -> Self {
        Self {
            year: cell.year,
            month: cell.month,
            value: mode.value_of(cell),
            label: mode.label(),
            x,
            y,
        }
    }

    /// "YYYY-MM"
    pub fn title(&self) -> String {
        format_year_month(self.year, self.month)
    }

    /// e.g. "max: 33.0 °C", or "max: N/A" without data.
    pub fn value_text(&self) -> String {
        match self.value {
            Some(_) => format!("{}: {} °C", self.label, format_temperature(self.value)),
            None => format!("{}: {}", self.label, format_temperature(None)),
        }
    }
}

/// Receives hover and leave notifications.
///
/// Implementations must not call back into the controller that notified them.
pub trait TooltipPresenter {
    fn show(&mut self, info: &HoverInfo);
    fn hide(&mut self);
}

/// Records the latest tooltip state. Used by headless hosts.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TooltipState {
    pub current: Option<HoverInfo>,
    pub shows: usize,
    pub hides: usize,
}

impl TooltipPresenter for TooltipState {
    fn show(&mut self, info: &HoverInfo) {
        self.current = Some(info.clone());
        self.shows += 1;
    }

    fn hide(&mut self) {
        self.current = None;
        self.hides += 1;
    }
}

/// Outcome of the one-time data load.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Ready(Dataset),
    Failed(String),
}

pub struct Controller<P: TooltipPresenter> {
    config: GridConfig,
    state: LoadState,
    mode: ViewMode,
    size: Option<Size>,
    layout: Option<Layout>,
    scene: Option<Scene>,
    hovered: Option<usize>,
    presenter: P,
}

impl<P: TooltipPresenter> Controller<P> {
    pub fn new(config: GridConfig, presenter: P) -> Self {
        Self {
            config,
            state: LoadState::Pending,
            mode: ViewMode::default(),
            size: None,
            layout: None,
            scene: None,
            hovered: None,
            presenter,
        }
    }

    /// Record the load outcome. Only the first call has any effect.
    pub fn finish_loading(&mut self, result: Result<Dataset, TgError>) {
        if self.state != LoadState::Pending {
            log::warn!("ignoring second load result; data loads once");
            return;
        }
        self.state = match result {
            Ok(dataset) => {
                log::info!(
                    "dataset ready: {} years, {} cells",
                    dataset.years.len(),
                    dataset.cells.len()
                );
                LoadState::Ready(dataset)
            }
            Err(e) => {
                log::error!("failed to load temperature data: {}", e);
                LoadState::Failed(e.to_string())
            }
        };
        self.relayout();
    }

    pub fn load_state(&self) -> &LoadState {
        &self.state
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        match &self.state {
            LoadState::Ready(dataset) => Some(dataset),
            _ => None,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// The scene from the latest render, if data and a size are both known.
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// New surface size: recompute layout and re-render. Mode and data are unchanged.
    pub fn set_size(&mut self, size: Size) -> Option<&Scene> {
        self.size = Some(size);
        self.relayout();
        self.scene.as_ref()
    }

    /// Flip between max-view and min-view and re-render with the cached layout.
    pub fn toggle_mode(&mut self) -> ViewMode {
        self.mode = self.mode.toggled();
        self.clear_hover();
        self.render();
        self.mode
    }

    /// Re-render with the current layout and mode. A no-op before data is ready.
    pub fn render(&mut self) -> Option<&Scene> {
        let scene = match (&self.state, &self.layout) {
            (LoadState::Ready(dataset), Some(layout)) => {
                Some(render(&dataset.cells, layout, self.mode, &self.config))
            }
            _ => None,
        };
        self.scene = scene;
        self.scene.as_ref()
    }

    /// Pointer moved to `(x, y)` on the surface.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let hit = self
            .scene
            .as_ref()
            .and_then(|scene| scene.hit_test(x, y))
            .map(|region| region.cell_index);
        let mode = self.mode;
        let info = match (hit, self.dataset()) {
            (Some(index), Some(dataset)) => dataset
                .cells
                .get(index)
                .map(|cell| HoverInfo::new(cell, mode, x, y)),
            _ => None,
        };
        match info {
            Some(info) => {
                self.hovered = hit;
                self.presenter.show(&info);
            }
            None => self.clear_hover(),
        }
    }

    /// Pointer left the surface.
    pub fn pointer_leave(&mut self) {
        self.clear_hover();
    }

    /// Subscribe a shared controller to surface sizes. The controller stops
    /// receiving sizes once the returned subscription is dropped.
    pub fn mount(controller: &Rc<RefCell<Self>>, hub: &Rc<ResizeHub>) -> Subscription
    where
        P: 'static,
    {
        let weak = Rc::downgrade(controller);
        hub.subscribe(move |size| {
            if let Some(controller) = weak.upgrade() {
                controller.borrow_mut().set_size(size);
            }
        })
    }

    fn relayout(&mut self) {
        self.clear_hover();
        self.layout = match (&self.state, self.size) {
            (LoadState::Ready(dataset), Some(size)) => {
                Some(Layout::compute(size, &dataset.years, &self.config))
            }
            _ => None,
        };
        self.render();
    }

    fn clear_hover(&mut self) {
        if self.hovered.take().is_some() {
            self.presenter.hide();
        }
    }
}
