//! Button switching between max-view and min-view.

use crate::state::{AppState, WebGrid};
use dioxus::prelude::*;

#[component]
pub fn ModeToggle() -> Element {
    let mut state = use_context::<AppState>();
    let grid = use_context::<WebGrid>();
    let label = format!("Show {}", (state.mode)().toggled().title());

    let on_click = move |_: Event<MouseData>| {
        let (mode, svg) = grid.toggle_mode();
        state.mode.set(mode);
        if let Some(svg) = svg {
            state.svg.set(svg);
        }
    };

    rsx! {
        button {
            style: "margin: 8px 0; padding: 6px 12px; cursor: pointer;",
            disabled: (state.loading)() || (state.error_msg)().is_some(),
            onclick: on_click,
            "{label}"
        }
    }
}
