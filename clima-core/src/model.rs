use serde::{Deserialize, Serialize};

/// Caller-supplied query parameters, kept in insertion order.
///
/// Keys and values are passed through to the weather service untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams(Vec<(String, String)>);

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing an earlier value for the same key.
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for SearchParams {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().fold(Self::new(), |params, (k, v)| params.with(k, v))
    }
}

/// Visibility in kilometers: whole when the meter value divides evenly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Kilometers {
    Whole(i64),
    Fractional(f64),
}

impl std::fmt::Display for Kilometers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kilometers::Whole(km) => write!(f, "{km}"),
            Kilometers::Fractional(km) => write!(f, "{km}"),
        }
    }
}

/// Display-ready current conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temp: i64,
    pub description: String,
    pub feels_like: i64,
    pub temp_min: i64,
    pub temp_max: i64,
    pub humidity: f64,
    pub name: String,
    pub country: String,
    pub sunrise: String,
    pub sunset: String,
    pub speed: f64,
    pub icon: String,
    pub local_date: String,
    pub formatted_local_time: String,
    pub dt: i64,
    pub timezone: i64,
    pub lat: f64,
    pub lon: f64,
    pub pressure: i64,
    pub visibility: Kilometers,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub temp: i64,
    /// Local `HH:MM` label.
    pub title: String,
    pub icon: String,
    /// Raw `YYYY-MM-DD HH:MM:SS` stamp from the service.
    pub date: String,
    /// Wind speed in km/h.
    pub speed: i64,
    pub deg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub temp_max: i64,
    pub temp_min: i64,
    /// Weekday name.
    pub title: String,
    pub icon: String,
    /// Day and month label.
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastView {
    pub hourly: Vec<HourlyForecast>,
    pub daily: Vec<DailyForecast>,
}

/// Current conditions merged with the forecast, as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    #[serde(flatten)]
    pub current: CurrentWeather,
    pub hourly: Vec<HourlyForecast>,
    pub daily: Vec<DailyForecast>,
}

impl WeatherReport {
    pub fn new(current: CurrentWeather, forecast: ForecastView) -> Self {
        Self {
            current,
            hourly: forecast.hourly,
            daily: forecast.daily,
        }
    }
}
