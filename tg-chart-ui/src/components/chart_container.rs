//! Chart container component.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// Optional minimum height in pixels
    #[props(default = 360)]
    pub min_height: u32,
    pub children: Element,
}

/// Positions the grid surface and its tooltip.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            {props.children}
        }
    }
}
