//! Shared Dioxus components and browser bridge for Thermogrid chart apps.
//!
//! This crate provides:
//! - `js_bridge`: browser fetch of (optionally gzipped) CSV via `web-sys`
//! - `grid`: `GridHandle`, the shared controller plus resize hub a page drives
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (grid surface, tooltip, toggle, etc.)

pub mod components;
pub mod grid;
pub mod js_bridge;
pub mod state;
