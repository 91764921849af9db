//! Reusable Dioxus RSX components for Thermogrid chart apps.

mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod mode_toggle;
mod temperature_grid;
mod tooltip;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use mode_toggle::ModeToggle;
pub use temperature_grid::TemperatureGrid;
pub use tooltip::Tooltip;
