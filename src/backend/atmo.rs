#![cfg(feature = "server")]
use std::error::Error as _;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use dioxus::logger::tracing::{error, info};
use once_cell::sync::Lazy;
use reqwest::{header, Client, Url};

use crate::backend::config::AtmoConfig;
use crate::shared::types::AirQualityEnvelope;

/// Process-wide client, configured from the environment on first use.
pub static ATMO: Lazy<Arc<AtmoClient>> =
    Lazy::new(|| Arc::new(AtmoClient::new(AtmoConfig::from_env()).expect("atmo client")));

#[derive(Debug, Clone)]
pub struct AtmoClient {
    http: Client,
    config: AtmoConfig,
}

impl AtmoClient {
    pub fn new(config: AtmoConfig) -> Result<Self> {
        let http = Client::builder()
            .build()
            .context("building HTTP client")?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &AtmoConfig {
        &self.config
    }

    /// `{base}/communes/{code}/indices/atmo`, without the query string.
    pub fn indices_url(&self, code_insee: &str) -> Result<Url> {
        let mut url = Url::parse(&self.config.base_url)
            .with_context(|| format!("invalid ATMO_BASE_URL {:?}", self.config.base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("ATMO_BASE_URL cannot be a base: {}", self.config.base_url))?
            .pop_if_empty()
            .extend(["communes", code_insee, "indices", "atmo"]);
        Ok(url)
    }

    /// Fetches the current indices for one commune and returns the body as-is.
    /// Failures come back as a single error carrying status, body snippet or cause chain.
    pub async fn fetch_indices(&self, code_insee: &str) -> Result<serde_json::Value> {
        let token = self
            .config
            .api_token
            .as_deref()
            .ok_or_else(|| anyhow!("ATMO_API_TOKEN not set"))?;
        let url = self.indices_url(code_insee)?;
        // logged before the token is appended
        info!("[atmo] GET {}", url);

        let res = self
            .http
            .get(url.clone())
            .query(&[("api_token", token), ("date_echeance", "now")])
            .header(header::USER_AGENT, &self.config.user_agent)
            .send()
            .await;
        let res = match res {
            Ok(r) => r,
            Err(e) => {
                // reqwest errors embed the full URL, token included
                let e = e.without_url();
                let mut chain = vec![e.to_string()];
                let mut src: Option<&dyn std::error::Error> = e.source();
                while let Some(s) = src {
                    chain.push(s.to_string());
                    src = s.source();
                }
                return Err(anyhow!("sending GET {}: {}", url, chain.join(" -> ")));
            }
        };

        let status = res.status();
        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            return Err(anyhow!(
                "GET {} failed with status {}\nBody snippet: {}",
                url,
                status,
                snippet(&text)
            ));
        }

        let bytes = res
            .bytes()
            .await
            .map_err(|e| anyhow!("reading body from GET {}: {}", url, e.without_url()))?;
        serde_json::from_slice(&bytes).map_err(|e| {
            anyhow!(
                "decoding JSON from GET {} failed: {}\nBody snippet: {}",
                url,
                e,
                snippet(&String::from_utf8_lossy(&bytes))
            )
        })
    }

    /// The same call, read as the `{success, data}` envelope the page consumes.
    /// Any upstream failure or unexpected shape yields an empty, unsuccessful
    /// envelope, which the page shows as "no data".
    pub async fn fetch_envelope(&self, code_insee: &str) -> AirQualityEnvelope {
        let body = match self.fetch_indices(code_insee).await {
            Ok(body) => body,
            Err(e) => {
                error!("Erreur API Atmo (code_insee={}): {:#}", code_insee, e);
                return AirQualityEnvelope::default();
            }
        };
        serde_json::from_value(body).unwrap_or_else(|e| {
            error!("Erreur API Atmo (code_insee={}): unexpected payload: {}", code_insee, e);
            AirQualityEnvelope::default()
        })
    }
}

fn snippet(text: &str) -> String {
    text.chars().take(300).collect()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;
    use crate::backend::config::{DEFAULT_BASE_URL, USER_AGENT};
    use crate::backend::fake_upstream::{client_for, closed_port, spawn_upstream};
    use crate::shared::state::{DashboardError, DashboardState};

    fn client(base_url: &str, token: Option<&str>) -> AtmoClient {
        AtmoClient::new(AtmoConfig {
            base_url: base_url.into(),
            api_token: token.map(Into::into),
            user_agent: USER_AGENT.into(),
        })
        .unwrap()
    }

    #[test]
    fn builds_indices_url() {
        let c = client(DEFAULT_BASE_URL, Some("t"));
        assert_eq!(
            c.indices_url("69123").unwrap().as_str(),
            "https://api.atmo-aura.fr/api/v1/communes/69123/indices/atmo"
        );
        let c = client("http://localhost:9000/api/v1/", Some("t"));
        assert_eq!(
            c.indices_url("38185").unwrap().as_str(),
            "http://localhost:9000/api/v1/communes/38185/indices/atmo"
        );
    }

    #[test]
    fn code_stays_in_its_segment() {
        let c = client(DEFAULT_BASE_URL, Some("t"));
        let url = c.indices_url("69/../x").unwrap();
        assert_eq!(
            url.path(),
            "/api/v1/communes/69%2F..%2Fx/indices/atmo"
        );
    }

    #[tokio::test]
    async fn missing_token_fails_before_sending() {
        let c = client("http://127.0.0.1:9", None);
        let err = c.fetch_indices("69123").await.unwrap_err();
        assert!(err.to_string().contains("ATMO_API_TOKEN"));
    }

    #[tokio::test]
    async fn failed_status_error_carries_status_and_body() {
        let (addr, _) = spawn_upstream(StatusCode::BAD_GATEWAY, r#"{"message":"upstream down"}"#).await;
        let err = client_for(addr, Some("t")).fetch_indices("69123").await.unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("502"), "{msg}");
        assert!(msg.contains("upstream down"), "{msg}");
        assert!(!msg.contains("api_token"), "{msg}");
    }

    #[tokio::test]
    async fn transport_error_carries_cause_without_token() {
        let err = client_for(closed_port().await, Some("s3cr3t"))
            .fetch_indices("69123")
            .await
            .unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.starts_with("sending GET"), "{msg}");
        assert!(!msg.contains("s3cr3t"), "{msg}");
    }

    #[tokio::test]
    async fn envelope_decodes_relayed_body() {
        let (addr, _) = spawn_upstream(
            StatusCode::OK,
            r##"{"success":true,"data":[{"code_insee":"69123","commune_nom":"Lyon","date_echeance":"2024-05-10","indice":2,"qualificatif":"Moyen","couleur_html":"#50CCAA","sous_indices":[{"polluant_nom":"O3","concentration":71.2,"indice":2}]}]}"##,
        )
        .await;
        let env = client_for(addr, Some("t")).fetch_envelope("69123").await;
        assert!(env.success);
        assert_eq!(env.data.len(), 1);
        assert_eq!(env.data[0].commune_name, "Lyon");
        assert_eq!(env.data[0].sub_indices[0].pollutant_name, "O3");

        match DashboardState::from_fetch::<String>(Ok(env)) {
            DashboardState::Loaded(r) => assert_eq!(r.overall_qualifier, "Moyen"),
            other => panic!("expected a reading, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn upstream_failure_reads_as_no_data() {
        let (addr, _) = spawn_upstream(StatusCode::BAD_GATEWAY, r#"{"message":"nope"}"#).await;
        let env = client_for(addr, Some("t")).fetch_envelope("69123").await;
        assert_eq!(env, AirQualityEnvelope::default());
        assert_eq!(
            DashboardState::from_fetch::<String>(Ok(env)),
            DashboardState::Error(DashboardError::NoData)
        );

        let env = client_for(closed_port().await, Some("t")).fetch_envelope("69123").await;
        assert_eq!(
            DashboardState::from_fetch::<String>(Ok(env)),
            DashboardState::Error(DashboardError::NoData)
        );
    }

    #[tokio::test]
    async fn unexpected_shape_reads_as_no_data() {
        let (addr, _) = spawn_upstream(StatusCode::OK, r#"{"success":true,"data":"oops"}"#).await;
        let env = client_for(addr, Some("t")).fetch_envelope("69123").await;
        assert_eq!(
            DashboardState::from_fetch::<String>(Ok(env)),
            DashboardState::Error(DashboardError::NoData)
        );
    }
}
