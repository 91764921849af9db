//! The grid surface: renders the current scene and routes pointer and
//! resize events into the shared controller.

use crate::components::Tooltip;
use crate::state::{AppState, WebGrid};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[component]
pub fn TemperatureGrid() -> Element {
    let mut state = use_context::<AppState>();
    let grid = use_context::<WebGrid>();

    // Live for as long as the component is mounted.
    let subscription = use_hook({
        let grid = grid.clone();
        move || Rc::new(RefCell::new(Some(grid.mount())))
    });
    use_drop(move || {
        if subscription.borrow_mut().take().is_some() {
            log::debug!("temperature grid unmounted, resize subscription released");
        }
    });

    let mounted_grid = grid.clone();
    let on_mounted = move |evt: MountedEvent| {
        let data = evt.data();
        let grid = mounted_grid.clone();
        spawn(async move {
            if let Ok(rect) = data.get_client_rect().await {
                if let Some(svg) = grid.resize(rect.width(), rect.height()) {
                    state.svg.set(svg);
                }
            }
        });
    };

    let resize_grid = grid.clone();
    let on_resize = move |evt: Event<ResizeData>| {
        if let Ok(size) = evt.data().get_content_box_size() {
            if let Some(svg) = resize_grid.resize(size.width, size.height) {
                state.svg.set(svg);
            }
        }
    };

    let move_grid = grid.clone();
    let on_mouse_move = move |evt: Event<MouseData>| {
        let point = evt.data().element_coordinates();
        move_grid.pointer_move(point.x, point.y);
    };

    let on_mouse_leave = move |_: Event<MouseData>| grid.pointer_leave();

    let svg = (state.svg)();

    rsx! {
        div {
            style: "position: relative; width: 100%; height: 60vh; min-height: 320px;",
            onmounted: on_mounted,
            onresize: on_resize,
            onmousemove: on_mouse_move,
            onmouseleave: on_mouse_leave,
            // pointer offsets must be relative to the outer div
            div {
                style: "position: absolute; inset: 0; pointer-events: none;",
                dangerous_inner_html: "{svg}",
            }
            Tooltip {}
        }
    }
}
