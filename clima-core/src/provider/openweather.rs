use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{ClimaError, SearchParams, config::ApiSettings};

use super::{Endpoint, WeatherSource};

/// Keys the source always sets itself; caller-supplied values are dropped.
const RESERVED_KEYS: [&str; 2] = ["appid", "lang"];

#[derive(Debug, Clone)]
pub struct OpenWeatherSource {
    settings: ApiSettings,
    http: Client,
}

impl OpenWeatherSource {
    pub fn new(settings: ApiSettings) -> Result<Self, ClimaError> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(ClimaError::Client)?;

        Ok(Self { settings, http })
    }

    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), endpoint)
    }

    /// Caller parameters followed by the credential and response language.
    pub fn query_pairs<'a>(&'a self, params: &'a SearchParams) -> Vec<(&'a str, &'a str)> {
        params
            .iter()
            .filter(|(k, _)| !RESERVED_KEYS.contains(k))
            .chain([
                ("appid", self.settings.api_key.as_str()),
                ("lang", self.settings.lang.as_str()),
            ])
            .collect()
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherSource {
    #[instrument(level = "debug", skip_all, fields(endpoint = %endpoint))]
    async fn fetch(&self, endpoint: Endpoint, params: &SearchParams) -> Result<Value, ClimaError> {
        let url = self.endpoint_url(endpoint);
        debug!(%url, "requesting OpenWeather");

        let res = self
            .http
            .get(&url)
            .query(&self.query_pairs(params))
            .send()
            .await
            .map_err(|source| ClimaError::Fetch { endpoint, source })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| ClimaError::Parse {
            endpoint,
            message: format!("failed to read response body: {e}"),
        })?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "OpenWeather returned an error status");
            return Err(ClimaError::Status {
                endpoint,
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let value = serde_json::from_str(&body).map_err(|e| ClimaError::Parse {
            endpoint,
            message: e.to_string(),
        })?;
        debug!(bytes = body.len(), "OpenWeather response parsed");

        Ok(value)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
