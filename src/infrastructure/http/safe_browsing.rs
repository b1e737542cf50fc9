//! Google Safe Browsing v4 `threatMatches:find` client.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::gateways::{ThreatLookup, ThreatLookupError};

/// Production lookup endpoint.
pub const DEFAULT_SAFE_BROWSING_URL: &str =
    "https://safebrowsing.googleapis.com/v4/threatMatches:find";

const THREAT_TYPES: &[&str] = &[
    "MALWARE",
    "SOCIAL_ENGINEERING",
    "UNWANTED_SOFTWARE",
    "POTENTIALLY_HARMFUL_APPLICATION",
];
const PLATFORM_TYPES: &[&str] = &["ANY_PLATFORM"];
const THREAT_ENTRY_TYPES: &[&str] = &["URL"];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FindThreatMatchesRequest<'a> {
    client: ClientInfo<'a>,
    threat_info: ThreatInfo<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientInfo<'a> {
    client_id: &'a str,
    client_version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThreatInfo<'a> {
    threat_types: &'a [&'a str],
    platform_types: &'a [&'a str],
    threat_entry_types: &'a [&'a str],
    threat_entries: [ThreatEntry<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ThreatEntry<'a> {
    url: &'a str,
}

/// An empty object means no match; `matches` is omitted entirely.
#[derive(Debug, Deserialize)]
struct FindThreatMatchesResponse {
    #[serde(default)]
    matches: Vec<serde_json::Value>,
}

/// Threat lookup against the Safe Browsing API.
pub struct SafeBrowsingClient {
    client: Client,
    /// Endpoint with the API key already in the query string. Never logged.
    endpoint: Url,
    client_id: String,
}

impl SafeBrowsingClient {
    /// Creates a client for `endpoint` authenticated with `api_key`.
    ///
    /// `client_id` identifies this application to the service.
    ///
    /// # Errors
    ///
    /// Returns an error if `endpoint` is not a valid URL or the HTTP client
    /// cannot be built.
    pub fn new(
        endpoint: &str,
        api_key: &str,
        client_id: impl Into<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let mut endpoint = Url::parse(endpoint)?;
        endpoint.query_pairs_mut().append_pair("key", api_key);

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            client_id: client_id.into(),
        })
    }
}

#[async_trait]
impl ThreatLookup for SafeBrowsingClient {
    async fn has_threat_match(&self, url: &str) -> Result<bool, ThreatLookupError> {
        let body = FindThreatMatchesRequest {
            client: ClientInfo {
                client_id: &self.client_id,
                client_version: env!("CARGO_PKG_VERSION"),
            },
            threat_info: ThreatInfo {
                threat_types: THREAT_TYPES,
                platform_types: PLATFORM_TYPES,
                threat_entry_types: THREAT_ENTRY_TYPES,
                threat_entries: [ThreatEntry { url }],
            },
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| ThreatLookupError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ThreatLookupError::Service(status.as_u16()));
        }

        let parsed: FindThreatMatchesResponse = response
            .json()
            .await
            .map_err(|e| ThreatLookupError::InvalidResponse(e.without_url().to_string()))?;

        Ok(!parsed.matches.is_empty())
    }
}
