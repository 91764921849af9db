//! Chart header component with title and color-scale note.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// Subtitle, e.g. which extreme colors the cells
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Header showing the title and an optional subtitle.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
