//! Rendering of Unix timestamps as a location's local wall-clock time.
//!
//! OpenWeather reports instants in UTC together with the location's UTC
//! offset in seconds. Shifting the instant by the offset and formatting the
//! result as UTC yields the local time at the location, independent of the
//! machine's own timezone. All offset arithmetic in the crate lives here.

use chrono::{
    DateTime, Datelike, Locale, Weekday,
    format::{Item, StrftimeItems},
};

use super::text::uppercase_first;
use crate::{ClimaError, error::Result};

/// 24-hour clock, e.g. `06:42`.
pub const HOUR_MINUTE: &str = "%H:%M";
/// Weekday and full date, e.g. `Segunda-feira, 15 de janeiro de 2024`.
pub const FULL_DATE: &str = "%A, %d de %B de %Y";
pub const LOCAL_TIME: &str = "Horario Local: %H:%M";
pub const WEEKDAY: &str = "%A";
pub const DAY_MONTH: &str = "%d de %B";
pub const DEFAULT_PATTERN: &str = "%A, %d de %B de %Y | Horario Local: %H:%M";

pub const DEFAULT_LOCALE: Locale = Locale::pt_BR;

/// Locale data for Portuguese abbreviates `%A` ("segunda"); dates here use
/// the full names.
fn full_weekday(locale: Locale, weekday: Weekday) -> Option<&'static str> {
    const PT: [&str; 7] = [
        "segunda-feira",
        "terça-feira",
        "quarta-feira",
        "quinta-feira",
        "sexta-feira",
        "sábado",
        "domingo",
    ];
    match locale {
        Locale::pt_BR | Locale::pt_PT => Some(PT[weekday.num_days_from_monday() as usize]),
        _ => None,
    }
}

/// Replace each `%A` in `pattern` with `name`, leaving `%%` escapes intact.
fn substitute_weekday(pattern: &str, name: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + name.len());
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('A') => out.push_str(name),
            Some(next) => {
                out.push('%');
                out.push(next);
            }
            None => out.push('%'),
        }
    }
    out
}

/// Format `secs + offset` as UTC using `pattern` (strftime syntax) and the
/// month and weekday names of `locale`. The first letter is capitalized.
pub fn format_local_time(secs: i64, offset: i64, pattern: &str, locale: Locale) -> Result<String> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(ClimaError::Format(format!("invalid time pattern '{pattern}'")));
    }

    let instant = secs
        .checked_add(offset)
        .and_then(|local| DateTime::from_timestamp(local, 0))
        .ok_or(ClimaError::InvalidTimestamp { secs, offset })?;

    let rendered = match full_weekday(locale, instant.weekday()) {
        Some(name) => instant
            .format_localized(&substitute_weekday(pattern, name), locale)
            .to_string(),
        None => instant.format_localized(pattern, locale).to_string(),
    };
    Ok(uppercase_first(&rendered))
}

/// Parse tags like `pt-BR` or `en_US`.
pub fn parse_locale(tag: &str) -> Result<Locale> {
    Locale::try_from(tag.trim().replace('-', "_").as_str())
        .map_err(|_| ClimaError::Format(format!("unknown locale '{tag}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-01-15 12:00:00 UTC, a Monday.
    const NOON: i64 = 1_705_320_000;
    const RECIFE: i64 = -10_800;

    #[test]
    fn positive_offset_renders_one_hour_ahead() {
        let utc = format_local_time(NOON, 0, HOUR_MINUTE, DEFAULT_LOCALE).unwrap();
        let local = format_local_time(NOON, 3600, HOUR_MINUTE, DEFAULT_LOCALE).unwrap();

        assert_eq!(utc, "12:00");
        assert_eq!(local, "13:00");
    }

    #[test]
    fn negative_offset_can_cross_midnight() {
        let early = NOON - 12 * 3600 + 60;
        let out = format_local_time(early, RECIFE, "%Y-%m-%d %H:%M", DEFAULT_LOCALE).unwrap();
        assert_eq!(out, "2024-01-14 21:01");
    }

    #[test]
    fn full_date_uses_portuguese_names_and_capitalizes() {
        let out = format_local_time(NOON, RECIFE, FULL_DATE, DEFAULT_LOCALE).unwrap();
        assert_eq!(out, "Segunda-feira, 15 de janeiro de 2024");
    }

    #[test]
    fn default_pattern_includes_local_time_label() {
        let out = format_local_time(NOON, RECIFE, DEFAULT_PATTERN, DEFAULT_LOCALE).unwrap();
        assert_eq!(out, "Segunda-feira, 15 de janeiro de 2024 | Horario Local: 09:00");
    }

    #[test]
    fn portuguese_weekdays_use_full_names() {
        let names: Vec<String> = (0..7)
            .map(|d| format_local_time(NOON + d * 86_400, 0, WEEKDAY, DEFAULT_LOCALE).unwrap())
            .collect();

        assert_eq!(
            names,
            vec![
                "Segunda-feira",
                "Terça-feira",
                "Quarta-feira",
                "Quinta-feira",
                "Sexta-feira",
                "Sábado",
                "Domingo",
            ]
        );
    }

    #[test]
    fn escaped_percent_is_not_a_weekday() {
        let out = format_local_time(NOON, 0, "%%A %A", DEFAULT_LOCALE).unwrap();
        assert_eq!(out, "%A segunda-feira");
    }

    #[test]
    fn non_ascii_first_letter_is_uppercased() {
        let out = format_local_time(NOON, 0, "às %H:%M", DEFAULT_LOCALE).unwrap();
        assert_eq!(out, "Às 12:00");
    }

    #[test]
    fn weekday_in_other_locale() {
        let locale = parse_locale("en-US").unwrap();
        assert_eq!(format_local_time(NOON, 0, WEEKDAY, locale).unwrap(), "Monday");
    }

    #[test]
    fn invalid_pattern_is_a_format_error() {
        let err = format_local_time(NOON, 0, "%Q", DEFAULT_LOCALE).unwrap_err();
        assert!(matches!(err, ClimaError::Format(_)));
    }

    #[test]
    fn out_of_range_timestamp_is_rejected() {
        let err = format_local_time(i64::MAX, 3600, HOUR_MINUTE, DEFAULT_LOCALE).unwrap_err();
        assert!(matches!(err, ClimaError::InvalidTimestamp { secs: i64::MAX, offset: 3600 }));

        let err = format_local_time(i64::MAX / 2, 0, HOUR_MINUTE, DEFAULT_LOCALE).unwrap_err();
        assert!(matches!(err, ClimaError::InvalidTimestamp { .. }));
    }

    #[test]
    fn unknown_locale_is_a_format_error() {
        assert_eq!(parse_locale("pt-BR").unwrap(), Locale::pt_BR);
        assert!(matches!(parse_locale("xx-YY"), Err(ClimaError::Format(_))));
    }
}
