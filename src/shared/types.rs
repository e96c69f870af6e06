use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_COMMUNE_INSEE: &str = "69123"; // Lyon

/// Response shape of the Atmo AURA `indices/atmo` endpoint, as relayed by the proxy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AirQualityEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<AirQualityReading>,
}

// Upstream fields may be missing or null; both read as the field's default
// (index 0 is "unavailable").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityReading {
    #[serde(rename = "code_insee", default = "default_commune", deserialize_with = "null_as_commune")]
    pub commune_insee_code: String,
    #[serde(rename = "indice", default, deserialize_with = "null_as_default")]
    pub overall_index: i32,
    #[serde(rename = "qualificatif", default, deserialize_with = "null_as_default")]
    pub overall_qualifier: String,
    #[serde(rename = "couleur_html", default, deserialize_with = "null_as_default")]
    pub overall_color: String,
    #[serde(rename = "commune_nom", default, deserialize_with = "null_as_default")]
    pub commune_name: String,
    #[serde(rename = "date_echeance", default, deserialize_with = "null_as_default")]
    pub valid_at: String,
    #[serde(rename = "sous_indices", default, deserialize_with = "null_as_default")]
    pub sub_indices: Vec<PollutantReading>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutantReading {
    #[serde(rename = "polluant_nom", default, deserialize_with = "null_as_default")]
    pub pollutant_name: String,
    #[serde(default)]
    pub concentration: Option<f64>, // upstream unit
    #[serde(rename = "indice", default)]
    pub pollutant_index: Option<i32>,
}

fn default_commune() -> String {
    DEFAULT_COMMUNE_INSEE.to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_commune<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_commune))
}
