use dioxus::prelude::*;

use crate::shared::index_status::legend_entries;

#[allow(non_snake_case)]
#[component]
pub fn Legend() -> Element {
    rsx! {
        div { class: "legend",
            h4 { class: "legend-title", "Légende" }
            div { class: "legend-grid",
                for entry in legend_entries() {
                    div { key: "{entry.label}", class: "legend-entry",
                        span { class: "legend-dot", style: "background-color: {entry.color}" }
                        span { "{entry.label}" }
                    }
                }
            }
        }
    }
}
