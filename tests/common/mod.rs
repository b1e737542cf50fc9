#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use link_shortener::api::handlers::{health_handler, redirect_handler};
use link_shortener::api::routes::api_routes;
use link_shortener::application::services::{LinkService, UrlCheckService};
use link_shortener::domain::gateways::{
    ProbeError, ProbeResponse, ReachabilityProbe, ThreatLookup, ThreatLookupError,
};
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::domain::view_event::ViewEvent;
use link_shortener::infrastructure::persistence::MemoryLinkRepository;
use link_shortener::state::AppState;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Probe answering with a fixed status, or failing for hosts listed as unreachable.
pub struct StubProbe {
    pub status: u16,
    pub unreachable_hosts: Vec<&'static str>,
}

impl StubProbe {
    pub fn ok() -> Self {
        Self {
            status: 200,
            unreachable_hosts: vec!["foo"],
        }
    }
}

#[async_trait]
impl ReachabilityProbe for StubProbe {
    async fn head(&self, url: &str) -> Result<ProbeResponse, ProbeError> {
        let host = url::Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .ok_or_else(|| ProbeError::InvalidUrl(url.to_string()))?;

        if self.unreachable_hosts.contains(&host.as_str()) {
            return Err(ProbeError::Transport("dns error".to_string()));
        }

        let reason = match self.status {
            200 => "OK",
            404 => "Not Found",
            _ => "",
        };

        Ok(ProbeResponse {
            status: self.status,
            reason: reason.to_string(),
        })
    }
}

/// Threat lookup flagging any URL that contains `malware`.
pub struct StubLookup {
    pub available: bool,
}

#[async_trait]
impl ThreatLookup for StubLookup {
    async fn has_threat_match(&self, url: &str) -> Result<bool, ThreatLookupError> {
        if !self.available {
            return Err(ThreatLookupError::Service(503));
        }
        Ok(url.contains("malware"))
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub repo: Arc<MemoryLinkRepository>,
    pub views: mpsc::Receiver<ViewEvent>,
}

pub fn create_test_state(
    repo: Arc<MemoryLinkRepository>,
    probe: StubProbe,
    lookup: StubLookup,
    queue_capacity: usize,
) -> (AppState, mpsc::Receiver<ViewEvent>) {
    let (tx, rx) = mpsc::channel(queue_capacity);

    let checks = UrlCheckService::new(
        Arc::new(probe),
        Arc::new(lookup),
        Duration::from_secs(1),
        Duration::from_secs(1),
    );
    let store: Arc<dyn LinkRepository> = repo;
    let link_service = Arc::new(LinkService::new(store, Arc::new(checks)));

    (AppState::new(link_service, tx), rx)
}

pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/{slug}", get(redirect_handler))
        .merge(api_routes())
        .with_state(state)
}

pub fn spawn_app_with(probe: StubProbe, lookup: StubLookup) -> TestApp {
    let repo = Arc::new(MemoryLinkRepository::new());
    let (state, views) = create_test_state(repo.clone(), probe, lookup, 100);

    TestApp {
        server: TestServer::new(test_router(state)).unwrap(),
        repo,
        views,
    }
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(StubProbe::ok(), StubLookup { available: true })
}

/// Creates a link through the API and returns its JSON.
pub async fn create_link(server: &TestServer, url: &str, slug: &str) -> serde_json::Value {
    let response = server
        .post("/link")
        .json(&serde_json::json!({ "url": url, "slug": slug }))
        .await;
    response.assert_status_ok();
    response.json::<serde_json::Value>()
}
