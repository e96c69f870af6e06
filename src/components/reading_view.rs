use dioxus::prelude::*;

use crate::components::Legend;
use crate::shared::index_status::status_for_index;
use crate::shared::types::{AirQualityReading, PollutantReading};
use crate::utils::format::{format_concentration, format_valid_at};

#[allow(non_snake_case)]
#[component]
pub fn ReadingView(reading: AirQualityReading) -> Element {
    let shown_date = format_valid_at(&reading.valid_at);

    rsx! {
        div { class: "reading",
            // Overall index
            div { class: "overall",
                h2 { class: "commune", "{reading.commune_name}" }
                div { class: "overall-badge", style: "background-color: {reading.overall_color}",
                    "{reading.overall_qualifier}"
                }
                p { class: "overall-index", "Indice global : {reading.overall_index}" }
                time { class: "valid-at", datetime: "{reading.valid_at}", "{shown_date}" }
            }
            // One badge per pollutant
            div { class: "pollutants",
                h3 { class: "section-title", "Détail par polluant" }
                div { class: "pollutant-row",
                    for (i, pollutant) in reading.sub_indices.iter().enumerate() {
                        PollutantBadge { key: "{i}", pollutant: pollutant.clone() }
                    }
                }
            }
            Legend {}
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn PollutantBadge(pollutant: PollutantReading) -> Element {
    let status = status_for_index(pollutant.pollutant_index);
    let index_text = pollutant
        .pollutant_index
        .map(|i| i.to_string())
        .unwrap_or_else(|| "-".to_string());
    let concentration = pollutant
        .concentration
        .map(|c| format!("Concentration : {}", format_concentration(c)));

    rsx! {
        div { class: "pollutant",
            div { class: "pollutant-badge", style: "background-color: {status.color}", title: concentration,
                "{pollutant.pollutant_name}"
            }
            div { class: "pollutant-index", "Indice {index_text}" }
            div { class: "pollutant-label", "{status.label}" }
        }
    }
}
