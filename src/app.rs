use dioxus::prelude::*;

use crate::components::Dashboard;
use crate::MAIN_CSS;

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        document::Title { "Qualité de l'air - Lyon" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Meta { name: "theme-color", content: "#f3f4f6" } // gray-100
        // Page container
        div { class: "page",
            div { class: "container",
                h1 { class: "title", "Qualité de l'air - Lyon" }
                Dashboard {}
            }
        }
    }
}
