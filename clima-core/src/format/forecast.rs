use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use super::{
    Formatter,
    raw::{OwForecastEntry, OwWeather},
    time::{DAY_MONTH, HOUR_MINUTE, WEEKDAY},
    units::{mps_to_kmh, round_half_up},
};
use crate::{
    ClimaError,
    error::Result,
    model::{DailyForecast, ForecastView, HourlyForecast},
};

pub const HOURLY_LIMIT: usize = 16;
pub const DAILY_DAYS: usize = 5;

/// Group entries by the date part of `dt_txt`.
///
/// Dates keep first-seen order and entries keep input order within a date,
/// so flattening the groups gives back the input sequence.
pub(crate) fn group_by_day(entries: &[OwForecastEntry]) -> IndexMap<&str, Vec<&OwForecastEntry>> {
    let mut groups: IndexMap<&str, Vec<&OwForecastEntry>> = IndexMap::new();
    for entry in entries {
        let date = entry
            .dt_txt
            .split_once(' ')
            .map_or(entry.dt_txt.as_str(), |(date, _)| date);
        groups.entry(date).or_default().push(entry);
    }
    groups
}

fn first_condition<'a>(weather: &'a [OwWeather], dt_txt: &str) -> Result<&'a OwWeather> {
    weather.first().ok_or_else(|| {
        ClimaError::MalformedResponse(format!("forecast entry {dt_txt} has no condition entries"))
    })
}

impl Formatter {
    /// Build hourly and daily views from a `forecast` endpoint response.
    ///
    /// `secs` is the current observation time and `offset` the location's
    /// UTC offset, both taken from the current-weather view.
    pub fn forecast(&self, secs: i64, offset: i64, raw: &Value) -> Result<ForecastView> {
        let list = raw.get("list").ok_or_else(|| {
            ClimaError::MalformedResponse("forecast response has no `list`".into())
        })?;
        let entries = Vec::<OwForecastEntry>::deserialize(list)
            .map_err(|e| ClimaError::MalformedResponse(format!("forecast: {e}")))?;

        self.forecast_entries(secs, offset, &entries)
    }

    fn forecast_entries(
        &self,
        secs: i64,
        offset: i64,
        entries: &[OwForecastEntry],
    ) -> Result<ForecastView> {
        if entries.is_empty() {
            return Err(ClimaError::MalformedResponse("forecast list is empty".into()));
        }

        let hourly = entries
            .iter()
            .filter(|entry| entry.dt > secs)
            .take(HOURLY_LIMIT)
            .map(|entry| self.hourly(entry, offset))
            .collect::<Result<Vec<_>>>()?;

        // The first group is today, usually partial; show the following days.
        let daily = group_by_day(entries)
            .iter()
            .skip(1)
            .take(DAILY_DAYS)
            .map(|(date, day)| self.daily(date, day, offset))
            .collect::<Result<Vec<_>>>()?;

        Ok(ForecastView { hourly, daily })
    }

    fn hourly(&self, entry: &OwForecastEntry, offset: i64) -> Result<HourlyForecast> {
        let condition = first_condition(&entry.weather, &entry.dt_txt)?;

        Ok(HourlyForecast {
            temp: round_half_up(entry.main.temp),
            title: self.local_time(entry.dt, offset, HOUR_MINUTE)?,
            icon: self.icon(&condition.icon),
            date: entry.dt_txt.clone(),
            speed: mps_to_kmh(entry.wind.speed),
            deg: entry.wind.deg,
        })
    }

    fn daily(&self, date: &str, day: &[&OwForecastEntry], offset: i64) -> Result<DailyForecast> {
        let first = day.first().ok_or_else(|| {
            ClimaError::MalformedResponse(format!("forecast day {date} has no entries"))
        })?;
        let condition = first_condition(&first.weather, &first.dt_txt)?;

        let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
            ClimaError::MalformedResponse(format!("forecast date '{date}' is invalid: {e}"))
        })?;
        // Instant of local midnight on that date, so rendering with `offset` lands on it.
        let midnight = parsed
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp())
            .ok_or_else(|| ClimaError::MalformedResponse(format!("no midnight on {date}")))?;
        let local_midnight = midnight
            .checked_sub(offset)
            .ok_or(ClimaError::InvalidTimestamp { secs: midnight, offset })?;

        let temps = day.iter().map(|entry| entry.main.temp);
        let max = temps.clone().fold(f64::NEG_INFINITY, f64::max);
        let min = temps.fold(f64::INFINITY, f64::min);

        Ok(DailyForecast {
            temp_max: round_half_up(max),
            temp_min: round_half_up(min),
            title: self.local_time(local_midnight, offset, WEEKDAY)?,
            icon: self.icon(&condition.icon),
            date: self.local_time(local_midnight, offset, DAY_MONTH)?,
        })
    }
}
