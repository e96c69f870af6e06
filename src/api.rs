use dioxus::prelude::*;

use crate::shared::types::AirQualityEnvelope;

/// Current indices for a commune, read from the same upstream call the
/// `/api/air-quality` route relays. An upstream failure is not an error here:
/// it comes back as an empty, unsuccessful envelope. `Err` only means the
/// call to this function itself failed.
#[server(GetAirQuality)]
pub async fn get_air_quality(code_insee: String) -> Result<AirQualityEnvelope, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::ATMO;

        return Ok(ATMO.fetch_envelope(&code_insee).await);
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = code_insee;
        Err(ServerFnError::ServerError(
            "server functions are unavailable in this build".to_string(),
        ))
    }
}
