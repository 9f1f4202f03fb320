//! Conversion of raw OpenWeather JSON into display-ready view models.

use chrono::Locale;

use crate::{error::Result, icon::IconResolver};

pub mod current;
pub mod forecast;
pub(crate) mod raw;
pub mod text;
pub mod time;
pub mod units;

/// Formats current and forecast responses for one locale and icon set.
#[derive(Debug)]
pub struct Formatter {
    icons: Box<dyn IconResolver>,
    locale: Locale,
}

impl Formatter {
    pub fn new(icons: impl IconResolver + 'static, locale: Locale) -> Self {
        Self {
            icons: Box::new(icons),
            locale,
        }
    }

    fn icon(&self, code: &str) -> String {
        self.icons.locate(code)
    }

    fn local_time(&self, secs: i64, offset: i64, pattern: &str) -> Result<String> {
        time::format_local_time(secs, offset, pattern, self.locale)
    }
}
