use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

use crate::{ClimaError, SearchParams};

pub mod openweather;

/// The two OpenWeather endpoints the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Weather,
    Forecast,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Weather => "weather",
            Endpoint::Forecast => "forecast",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can answer an endpoint query with a JSON document.
///
/// The body is returned as-is; shape checks belong to the formatters.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch(&self, endpoint: Endpoint, params: &SearchParams) -> Result<Value, ClimaError>;
}
