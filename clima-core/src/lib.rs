//! Core library for the `clima` weather client.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weather source abstraction and its OpenWeather implementation
//! - Formatters that turn raw responses into display-ready view models
//! - The service that chains current weather and forecast into one report
//!
//! It is used by `clima-cli`, but can also back other front ends.

pub mod config;
pub mod error;
pub mod format;
pub mod icon;
pub mod model;
pub mod provider;
pub mod service;

pub use config::{ApiSettings, Config};
pub use error::ClimaError;
pub use format::Formatter;
pub use icon::{IconResolver, LocalIcons};
pub use model::{
    CurrentWeather, DailyForecast, ForecastView, HourlyForecast, Kilometers, SearchParams,
    WeatherReport,
};
pub use provider::{Endpoint, WeatherSource, openweather::OpenWeatherSource};
pub use service::{WeatherService, service_from_config};
pub use tokio_util::sync::CancellationToken;
