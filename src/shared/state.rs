use std::fmt::Display;

use dioxus::logger::tracing::error;

use crate::shared::types::{AirQualityEnvelope, AirQualityReading};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardError {
    /// The call went through but carried no reading.
    NoData,
    /// The call itself failed.
    RequestFailed,
}

impl DashboardError {
    pub fn message(self) -> &'static str {
        match self {
            DashboardError::NoData => "Aucune donnée disponible",
            DashboardError::RequestFailed => "Erreur lors de la récupération des données",
        }
    }
}

/// What the dashboard shows. Entered as `Loading` on every fetch, then replaced
/// wholesale by the outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Loading,
    Error(DashboardError),
    Loaded(AirQualityReading),
}

impl DashboardState {
    pub fn from_fetch<E: Display>(outcome: Result<AirQualityEnvelope, E>) -> Self {
        match outcome {
            Ok(envelope) if envelope.success => match envelope.data.into_iter().next() {
                Some(reading) => DashboardState::Loaded(reading),
                None => DashboardState::Error(DashboardError::NoData),
            },
            Ok(_) => DashboardState::Error(DashboardError::NoData),
            Err(e) => {
                error!("[dashboard] air quality fetch failed: {e}");
                DashboardState::Error(DashboardError::RequestFailed)
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Loading)
    }
}
