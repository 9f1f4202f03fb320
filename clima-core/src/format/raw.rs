//! Shapes of the OpenWeather responses the formatters read.
//! Fields the view models never use are not declared.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct OwCoord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwMain {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: f64,
    pub pressure: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwSys {
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwWeather {
    #[serde(default)]
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwWind {
    pub speed: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwCurrentResponse {
    pub coord: OwCoord,
    pub main: OwMain,
    pub name: String,
    pub dt: i64,
    pub sys: OwSys,
    pub weather: Vec<OwWeather>,
    pub wind: OwWind,
    pub timezone: i64,
    pub visibility: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwForecastMain {
    pub temp: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwForecastWind {
    pub speed: f64,
    #[serde(default)]
    pub deg: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwForecastEntry {
    pub dt: i64,
    pub dt_txt: String,
    pub main: OwForecastMain,
    pub weather: Vec<OwWeather>,
    pub wind: OwForecastWind,
}
