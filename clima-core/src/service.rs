use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use crate::{
    ClimaError, Config, SearchParams, WeatherReport,
    error::Result,
    format::Formatter,
    icon::LocalIcons,
    provider::{Endpoint, WeatherSource, openweather::OpenWeatherSource},
};

/// Runs the two-step query: current conditions, then the forecast for the
/// coordinates those conditions report.
#[derive(Debug)]
pub struct WeatherService<S> {
    source: S,
    formatter: Formatter,
}

impl<S: WeatherSource> WeatherService<S> {
    pub fn new(source: S, formatter: Formatter) -> Self {
        Self { source, formatter }
    }

    /// Fetch and format the combined report.
    ///
    /// `params` must identify a location (`q`, `id` or `lat`/`lon`); `units`,
    /// when present, is forwarded to the forecast request as well.
    #[instrument(level = "debug", skip_all)]
    pub async fn report(
        &self,
        params: &SearchParams,
        cancel: &CancellationToken,
    ) -> Result<WeatherReport> {
        let raw_current = self.fetch(Endpoint::Weather, params, cancel).await?;
        let current = self.formatter.current(&raw_current)?;
        debug!(name = %current.name, dt = current.dt, timezone = current.timezone, "current weather formatted");

        let mut forecast_params = SearchParams::new()
            .with("lat", current.lat)
            .with("lon", current.lon);
        if let Some(units) = params.get("units") {
            forecast_params.set("units", units);
        }

        let raw_forecast = self.fetch(Endpoint::Forecast, &forecast_params, cancel).await?;
        let forecast = self
            .formatter
            .forecast(current.dt, current.timezone, &raw_forecast)?;
        debug!(
            hourly = forecast.hourly.len(),
            daily = forecast.daily.len(),
            "forecast formatted"
        );

        Ok(WeatherReport::new(current, forecast))
    }

    async fn fetch(
        &self,
        endpoint: Endpoint,
        params: &SearchParams,
        cancel: &CancellationToken,
    ) -> Result<Value> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(%endpoint, "request cancelled");
                Err(ClimaError::Cancelled)
            }
            res = self.source.fetch(endpoint, params) => res,
        }
    }
}

/// Construct the OpenWeather-backed service described by `config`.
pub fn service_from_config(config: &Config) -> anyhow::Result<WeatherService<OpenWeatherSource>> {
    let source = OpenWeatherSource::new(config.api_settings()?)?;
    let formatter = Formatter::new(LocalIcons::new(config.icon_base.clone()), config.locale()?);
    Ok(WeatherService::new(source, formatter))
}
