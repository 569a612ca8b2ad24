//! HTTP client for the read-only station catalog endpoint.

use serde::{Deserialize, Serialize};

use super::error::CatalogError;

/// Wire format of a catalog record.
///
/// Conversion to the domain `Station` happens in the store, which also
/// filters out records with unusable coordinates.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StationDto {
    pub id: i32,
    pub name: String,
    pub line: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Configuration for the catalog client.
#[derive(Debug, Clone)]
pub struct CatalogClientConfig {
    /// Base URL of the catalog server, without the endpoint path.
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl CatalogClientConfig {
    /// Create a config pointing at the given catalog server.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 30,
        }
    }

    /// Override the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the station catalog endpoint.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client.
    pub fn new(config: CatalogClientConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the full station list.
    pub async fn fetch_all(&self) -> Result<Vec<StationDto>, CatalogError> {
        let url = format!("{}/api/stations", self.base_url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(CatalogError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let stations: Vec<StationDto> =
            serde_json::from_str(&body).map_err(|e| CatalogError::Json {
                message: e.to_string(),
            })?;

        Ok(stations)
    }
}
