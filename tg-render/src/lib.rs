//! Layout, rendering and interaction for the temperature grid.
//!
//! This crate provides:
//! - `layout`: band scales for the year and month axes plus legend geometry
//! - `color`: the 0-40 °C diverging color scale
//! - `scene` / `renderer`: a pure `render(...) -> Scene` with SVG output and hit-testing
//! - `interaction`: the view-mode controller and tooltip dispatch
//! - `resize`: surface-size subscriptions with explicit teardown

pub mod color;
pub mod config;
pub mod geometry;
pub mod interaction;
pub mod layout;
pub mod renderer;
pub mod resize;
pub mod scene;

pub use color::{color_scale, Rgb};
pub use config::GridConfig;
pub use geometry::{Margins, Size};
pub use interaction::{Controller, HoverInfo, LoadState, TooltipPresenter, TooltipState, ViewMode};
pub use layout::{Band, BandScale, Layout};
pub use renderer::render;
pub use resize::{ResizeHub, Subscription};
pub use scene::Scene;
