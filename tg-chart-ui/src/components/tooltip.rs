//! Floating tooltip for the hovered cell.

use crate::state::AppState;
use dioxus::prelude::*;
use tg_render::{HoverInfo, ViewMode};
use tg_utils::format::format_temperature;

const OFFSET: f64 = 12.0;

/// The monthly mean for the hovered mode, shown under the extreme.
fn mean_detail(state: &AppState, info: &HoverInfo) -> Option<String> {
    let dataset = state.dataset.read();
    let cell = dataset.as_ref()?.cell(info.year, info.month)?;
    let (label, mean) = match info.label {
        "min" => ("mean min", cell.mean_min()),
        _ => ("mean max", cell.mean_max()),
    };
    mean.map(|m| format!("{}: {} °C", label, format_temperature(Some(m))))
}

#[component]
pub fn Tooltip() -> Element {
    let state = use_context::<AppState>();
    let Some(info) = (state.tooltip)() else {
        return rsx! {};
    };

    let title = info.title();
    let value = info.value_text();
    let detail = mean_detail(&state, &info);
    let accent = if (state.mode)() == ViewMode::Max {
        "#2e7d32"
    } else {
        "#0277bd"
    };
    let style = format!(
        "position: absolute; left: {}px; top: {}px; pointer-events: none; \
         background: rgba(255, 255, 255, 0.95); border: 1px solid #ccc; \
         border-left: 3px solid {}; border-radius: 4px; padding: 6px 8px; \
         font-size: 12px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.2);",
        info.x + OFFSET,
        info.y + OFFSET,
        accent
    );

    rsx! {
        div {
            style: "{style}",
            div { style: "font-weight: bold;", "{title}" }
            div { "{value}" }
            if let Some(detail) = detail {
                div { style: "color: #666;", "{detail}" }
            }
        }
    }
}
