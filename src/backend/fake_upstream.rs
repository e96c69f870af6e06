//! Stand-in for the Atmo API, bound on a random local port.
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::Request,
    http::{header, StatusCode},
    Router,
};

use crate::backend::atmo::AtmoClient;
use crate::backend::config::{AtmoConfig, USER_AGENT};

#[derive(Debug, Clone)]
pub struct Seen {
    pub path: String,
    pub query: String,
    pub user_agent: String,
}

pub type SeenLog = Arc<Mutex<Vec<Seen>>>;

/// Answers every request with `status` and `body`, recording what it received.
pub async fn spawn_upstream(status: StatusCode, body: &'static str) -> (SocketAddr, SeenLog) {
    let seen: SeenLog = Arc::new(Mutex::new(Vec::new()));
    let log = seen.clone();
    let app = Router::new().fallback(move |req: Request| {
        let log = log.clone();
        async move {
            log.lock().unwrap().push(Seen {
                path: req.uri().path().to_string(),
                query: req.uri().query().unwrap_or_default().to_string(),
                user_agent: req
                    .headers()
                    .get(header::USER_AGENT)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string(),
            });
            (status, [(header::CONTENT_TYPE, "application/json")], body)
        }
    });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, seen)
}

/// A local address nothing listens on.
pub async fn closed_port() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

pub fn client_for(addr: SocketAddr, token: Option<&str>) -> AtmoClient {
    AtmoClient::new(AtmoConfig {
        base_url: format!("http://{addr}/api/v1"),
        api_token: token.map(Into::into),
        user_agent: USER_AGENT.into(),
    })
    .unwrap()
}
