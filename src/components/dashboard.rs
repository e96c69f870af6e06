use dioxus::prelude::*;

use crate::api::get_air_quality;
use crate::components::ReadingView;
use crate::shared::state::DashboardState;
use crate::shared::types::DEFAULT_COMMUNE_INSEE;
use crate::utils::format::clock_now;

/// Enters `Loading` and resolves the state from one call to the proxy.
/// Overlapping calls are not fenced: the last one to finish wins.
fn fetch_air_quality(
    mut state: Signal<DashboardState>,
    mut refreshed_at: Signal<Option<String>>,
) {
    state.set(DashboardState::Loading);
    spawn(async move {
        let outcome = get_air_quality(DEFAULT_COMMUNE_INSEE.to_string()).await;
        state.set(DashboardState::from_fetch(outcome));
        refreshed_at.set(Some(clock_now()));
    });
}

#[allow(non_snake_case)]
#[component]
pub fn Dashboard() -> Element {
    let state = use_signal(|| DashboardState::Loading);
    let refreshed_at = use_signal(|| Option::<String>::None);

    // Effects only run on the client, once after mount
    use_effect(move || fetch_air_quality(state, refreshed_at));

    let current = state.read().clone();
    let loading = current.is_loading();

    rsx! {
        div { class: "card",
            StatusPanel { state: current }

            div { class: "actions",
                button {
                    class: "refresh",
                    disabled: loading,
                    onclick: move |_| fetch_air_quality(state, refreshed_at),
                    if loading { "Chargement..." } else { "Actualiser" }
                }
                if let Some(at) = refreshed_at.read().as_ref() {
                    p { class: "refreshed-at", "Mis à jour à {at}" }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn StatusPanel(state: DashboardState) -> Element {
    match state {
        DashboardState::Loading => rsx! {
            div { class: "loading", "Chargement..." }
        },
        DashboardState::Error(kind) => rsx! {
            div { class: "error", "{kind.message()}" }
        },
        DashboardState::Loaded(reading) => rsx! {
            ReadingView { reading }
        },
    }
}
