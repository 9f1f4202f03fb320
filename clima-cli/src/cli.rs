use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use clima_core::{CancellationToken, Config, SearchParams, WeatherReport, service_from_config};
use inquire::{Password, PasswordDisplayMode, Select, Text};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "clima", version, about = "Current weather and forecast from OpenWeather")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and display preferences.
    Configure,

    /// Show current weather and forecast for a location.
    Show {
        /// City name, optionally with country code (e.g. "Recife,BR").
        city: Option<String>,

        #[arg(long, allow_hyphen_values = true, requires = "lon")]
        lat: Option<f64>,

        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lon: Option<f64>,

        /// OpenWeather city id.
        #[arg(long)]
        id: Option<u64>,

        /// Unit system; defaults to the configured one.
        #[arg(long, value_enum)]
        units: Option<Units>,

        /// Print the report as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print the location of the config file.
    ConfigPath,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Units {
    Metric,
    Imperial,
    Standard,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    fn temperature_symbol(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
            Units::Standard => "K",
        }
    }

    fn wind_symbol(&self) -> &'static str {
        match self {
            Units::Imperial => "mph",
            Units::Metric | Units::Standard => "m/s",
        }
    }
}

impl TryFrom<&str> for Units {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Units::from_str(value, true)
            .map_err(|_| anyhow::anyhow!("Unknown unit system '{value}'. Use metric, imperial or standard."))
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, lat, lon, id, units, json } => {
                let config = Config::load()?;
                let units = match units {
                    Some(units) => units,
                    None => Units::try_from(config.units.as_str())?,
                };
                let params = search_params(city, lat.zip(lon), id, units)?;
                show(&config, &params, units, json).await
            }
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
                Ok(())
            }
        }
    }
}

fn search_params(
    city: Option<String>,
    coords: Option<(f64, f64)>,
    id: Option<u64>,
    units: Units,
) -> anyhow::Result<SearchParams> {
    let params = match (city, coords, id) {
        (Some(city), None, None) => SearchParams::new().with("q", city),
        (None, Some((lat, lon)), None) => SearchParams::new().with("lat", lat).with("lon", lon),
        (None, None, Some(id)) => SearchParams::new().with("id", id),
        (None, None, None) => bail!("No location given. Pass a city, --lat/--lon or --id."),
        _ => bail!("Pass only one of: a city, --lat/--lon, --id."),
    };
    Ok(params.with("units", units.as_str()))
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    if api_key.trim().is_empty() {
        bail!("API key must not be empty");
    }
    config.set_api_key(api_key.trim().to_string());

    let lang = Text::new("Response language:")
        .with_default(&config.lang)
        .prompt()
        .context("Failed to read response language")?;
    config.lang = lang;

    let locale = Text::new("Locale for dates:")
        .with_default(&config.locale)
        .prompt()
        .context("Failed to read locale")?;
    config.locale = locale;
    config.locale()?;

    let units = Select::new(
        "Default units:",
        vec![Units::Metric.as_str(), Units::Imperial.as_str(), Units::Standard.as_str()],
    )
    .prompt()
    .context("Failed to read unit system")?;
    config.units = units.to_string();

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(config: &Config, params: &SearchParams, units: Units, json: bool) -> anyhow::Result<()> {
    let service = service_from_config(config)?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let report = service.report(params, &cancel).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render(&report, units));
    }
    Ok(())
}

fn render(report: &WeatherReport, units: Units) -> String {
    let c = &report.current;
    let t = units.temperature_symbol();
    let mut out = String::new();

    out.push_str(&format!("{}, {}\n", c.name, c.country));
    out.push_str(&format!("{}\n{}\n\n", c.local_date, c.formatted_local_time));
    out.push_str(&format!("{}{t}  {}\n", c.temp, c.description));
    out.push_str(&format!(
        "Sensação {}{t} | Mín {}{t} | Máx {}{t}\n",
        c.feels_like, c.temp_min, c.temp_max
    ));
    out.push_str(&format!(
        "Umidade {}% | Vento {} {} | Pressão {} atm | Visibilidade {} km\n",
        c.humidity,
        c.speed,
        units.wind_symbol(),
        c.pressure,
        c.visibility
    ));
    out.push_str(&format!("Nascer do sol {} | Pôr do sol {}\n", c.sunrise, c.sunset));

    if !report.hourly.is_empty() {
        out.push_str("\nPróximas horas\n");
        for h in &report.hourly {
            out.push_str(&format!(
                "  {}  {:>4}{t}  {:>3} km/h {:>3}°\n",
                h.title, h.temp, h.speed, h.deg
            ));
        }
    }

    if !report.daily.is_empty() {
        out.push_str("\nPróximos dias\n");
        for d in &report.daily {
            out.push_str(&format!(
                "  {:<14} {:<14} {:>4}{t} / {}{t}\n",
                d.title, d.date, d.temp_max, d.temp_min
            ));
        }
    }

    out
}
