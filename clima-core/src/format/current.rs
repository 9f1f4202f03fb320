use serde::Deserialize;
use serde_json::Value;

use super::{
    Formatter,
    raw::OwCurrentResponse,
    text::capitalize_words,
    time::{FULL_DATE, HOUR_MINUTE, LOCAL_TIME},
    units::{hpa_to_atm, meters_to_km, round_half_up},
};
use crate::{ClimaError, error::Result, model::CurrentWeather};

impl Formatter {
    /// Build the current-conditions view from a `weather` endpoint response.
    pub fn current(&self, raw: &Value) -> Result<CurrentWeather> {
        let data = OwCurrentResponse::deserialize(raw)
            .map_err(|e| ClimaError::MalformedResponse(format!("current weather: {e}")))?;

        let condition = data.weather.first().ok_or_else(|| {
            ClimaError::MalformedResponse("current weather has no condition entries".into())
        })?;
        let tz = data.timezone;

        Ok(CurrentWeather {
            temp: round_half_up(data.main.temp),
            description: capitalize_words(&condition.description),
            feels_like: round_half_up(data.main.feels_like),
            temp_min: round_half_up(data.main.temp_min),
            temp_max: round_half_up(data.main.temp_max),
            humidity: data.main.humidity,
            name: data.name,
            country: data.sys.country,
            sunrise: self.local_time(data.sys.sunrise, tz, HOUR_MINUTE)?,
            sunset: self.local_time(data.sys.sunset, tz, HOUR_MINUTE)?,
            speed: data.wind.speed,
            icon: self.icon(&condition.icon),
            local_date: self.local_time(data.dt, tz, FULL_DATE)?,
            formatted_local_time: self.local_time(data.dt, tz, LOCAL_TIME)?,
            dt: data.dt,
            timezone: tz,
            lat: data.coord.lat,
            lon: data.coord.lon,
            pressure: round_half_up(hpa_to_atm(data.main.pressure)),
            visibility: meters_to_km(data.visibility),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{format::time::DEFAULT_LOCALE, icon::LocalIcons, model::Kilometers};
    use serde_json::json;

    fn formatter() -> Formatter {
        Formatter::new(LocalIcons::new("/icons"), DEFAULT_LOCALE)
    }

    fn recife() -> Value {
        json!({
            "coord": { "lon": -34.8811, "lat": -8.0539 },
            "weather": [
                { "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" },
                { "id": 701, "main": "Mist", "description": "mist", "icon": "50d" }
            ],
            "main": {
                "temp": 27.5, "feels_like": 30.49, "temp_min": 26.2,
                "temp_max": 28.7, "pressure": 1013, "humidity": 78
            },
            "visibility": 10000,
            "wind": { "speed": 4.63, "deg": 120 },
            "dt": 1_705_320_000,
            "sys": { "country": "BR", "sunrise": 1_705_306_980, "sunset": 1_705_352_160 },
            "timezone": -10800,
            "name": "Recife"
        })
    }

    #[test]
    fn formats_current_conditions() {
        let out = formatter().current(&recife()).unwrap();

        assert_eq!(out.temp, 28);
        assert_eq!(out.feels_like, 30);
        assert_eq!(out.temp_min, 26);
        assert_eq!(out.temp_max, 29);
        assert_eq!(out.description, "Light Rain");
        assert_eq!(out.icon, "/icons/10d.png");
        assert_eq!(out.name, "Recife");
        assert_eq!(out.country, "BR");
        assert_eq!(out.humidity, 78.0);
        assert_eq!(out.speed, 4.63);
        assert_eq!(out.pressure, 1);
        assert_eq!(out.visibility, Kilometers::Whole(10));
        assert_eq!(out.dt, 1_705_320_000);
        assert_eq!(out.timezone, -10800);
        assert_eq!((out.lat, out.lon), (-8.0539, -34.8811));
    }

    #[test]
    fn renders_times_at_the_location() {
        let out = formatter().current(&recife()).unwrap();

        // 08:23 and 20:56 UTC.
        assert_eq!(out.sunrise, "05:23");
        assert_eq!(out.sunset, "17:56");
        assert_eq!(out.local_date, "Segunda-feira, 15 de janeiro de 2024");
        assert_eq!(out.formatted_local_time, "Horario Local: 09:00");
    }

    #[test]
    fn low_pressure_and_partial_visibility() {
        let mut raw = recife();
        raw["main"]["pressure"] = json!(500);
        raw["visibility"] = json!(9500);

        let out = formatter().current(&raw).unwrap();
        assert_eq!(out.pressure, 0);
        assert_eq!(out.visibility, Kilometers::Fractional(9.5));
    }

    #[test]
    fn temperatures_round_half_up() {
        let mut raw = recife();
        raw["main"]["temp"] = json!(-2.5);
        raw["main"]["feels_like"] = json!(-0.4);

        let out = formatter().current(&raw).unwrap();
        assert_eq!(out.temp, -2);
        assert_eq!(out.feels_like, 0);
    }

    #[test]
    fn empty_conditions_are_malformed() {
        let mut raw = recife();
        raw["weather"] = json!([]);

        let err = formatter().current(&raw).unwrap_err();
        assert!(matches!(err, ClimaError::MalformedResponse(_)));
    }

    #[test]
    fn missing_fields_are_malformed() {
        let mut raw = recife();
        raw.as_object_mut().unwrap().remove("sys");

        let err = formatter().current(&raw).unwrap_err();
        assert!(err.to_string().contains("sys"));

        let err = formatter().current(&json!({ "cod": "404", "message": "city not found" }));
        assert!(matches!(err, Err(ClimaError::MalformedResponse(_))));
    }
}
