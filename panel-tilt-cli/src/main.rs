use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use panel_tilt::{
    build_yearly_calendar, compute_optimal_angle, AngleResult, Location, MountingPositions,
    PanelTiltError, SeasonTag, YearlyCalendar, FRENCH_CITIES,
};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Seasonal tilt planner for adjustable solar panel mounts")]
struct Cli {
    /// City from the built-in table (see --list-cities); takes precedence
    /// over --latitude and --longitude
    #[arg(long)]
    city: Option<String>,
    /// Latitude in decimal degrees (-90 to 90, positive north)
    #[arg(long, allow_hyphen_values = true, env = "PANEL_TILT_LATITUDE")]
    latitude: Option<f64>,
    /// Longitude in decimal degrees (-180 to 180), used for labels only
    #[arg(long, allow_hyphen_values = true, env = "PANEL_TILT_LONGITUDE")]
    longitude: Option<f64>,
    /// Date to evaluate (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Year of the seasonal calendar; defaults to the current year
    #[arg(long, allow_hyphen_values = true)]
    year: Option<i32>,
    /// Comma-separated mounting positions in degrees, e.g. 27,35,42
    #[arg(long, value_delimiter = ',', env = "PANEL_TILT_POSITIONS")]
    positions: Option<Vec<f64>>,
    /// Path to a JSON configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Print results as JSON.
    #[arg(long)]
    json: bool,
    /// List the built-in cities and exit.
    #[arg(long)]
    list_cities: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example_config: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigJson {
    positions: Option<MountingPositions>,
    year: Option<i32>,
}

#[derive(Debug)]
struct Settings {
    positions: MountingPositions,
    year: i32,
}

/// Command-line values win over the config file, which wins over defaults.
fn resolve_settings(
    cli: &Cli,
    file: ConfigJson,
    today: NaiveDate,
) -> Result<Settings, PanelTiltError> {
    let positions = match &cli.positions {
        Some(values) => MountingPositions::new(values.clone())?,
        None => file.positions.unwrap_or_default(),
    };
    let year = cli.year.or(file.year).unwrap_or_else(|| today.year());
    Ok(Settings { positions, year })
}

fn resolve_location(cli: &Cli) -> Result<Location, PanelTiltError> {
    match (&cli.city, cli.latitude) {
        (Some(name), _) => Location::city(name),
        (None, Some(latitude)) => {
            Location::from_coordinates(latitude, cli.longitude.unwrap_or(0.0))
        }
        (None, None) => Err(PanelTiltError::MissingInput("--latitude or --city")),
    }
}

#[derive(Debug, Serialize)]
struct LocationRecord {
    label: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Serialize)]
struct SegmentRecord {
    position: f64,
    start_day: u32,
    end_day: u32,
    start: Option<String>,
    end: Option<String>,
    season: SeasonTag,
}

#[derive(Debug, Serialize)]
struct ResultRecord<'a> {
    #[serde(flatten)]
    result: &'a AngleResult,
    /// Exact angle rounded to one decimal.
    display_angle: f64,
}

#[derive(Debug, Serialize)]
struct Output<'a> {
    location: LocationRecord,
    date: String,
    result: ResultRecord<'a>,
    calendar_year: i32,
    calendar: Vec<SegmentRecord>,
}

fn build_output<'a>(
    location: &Location,
    date: NaiveDate,
    result: &'a AngleResult,
    calendar: &YearlyCalendar,
    positions: &MountingPositions,
) -> Output<'a> {
    let segments = calendar
        .segments
        .iter()
        .map(|s| SegmentRecord {
            position: s.position,
            start_day: s.start_day,
            end_day: s.end_day,
            start: calendar.start_date(s).map(|d| d.to_string()),
            end: calendar.end_date(s).map(|d| d.to_string()),
            season: s.season(positions),
        })
        .collect();
    Output {
        location: LocationRecord {
            label: location.label(),
            latitude: location.latitude(),
            longitude: location.longitude(),
        },
        date: date.to_string(),
        result: ResultRecord {
            result,
            display_angle: result.display_angle(),
        },
        calendar_year: calendar.year,
        calendar: segments,
    }
}

fn render_text(
    location: &Location,
    date: NaiveDate,
    result: &AngleResult,
    calendar: &YearlyCalendar,
    positions: &MountingPositions,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{} • {}", location, date.format("%-d %B %Y"))?;
    writeln!(out, "  exact angle           {}", result)?;
    writeln!(out, "  recommended position  {}°", result.recommended_position)?;
    writeln!(out)?;
    writeln!(out, "Seasonal calendar {}", calendar.year)?;
    for segment in &calendar.segments {
        let range = match (calendar.start_date(segment), calendar.end_date(segment)) {
            (Some(start), Some(end)) => {
                format!("{} – {}", start.format("%-d %B"), end.format("%-d %B"))
            }
            _ => format!("day {} – day {}", segment.start_day, segment.end_day),
        };
        writeln!(
            out,
            "  {:>4}°  {:<28} {}",
            segment.position,
            range,
            segment.season(positions)
        )?;
    }
    Ok(out)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env()
                    .add_directive("panel_tilt=info".parse()?)
                    .add_directive("panel_tilt_cli=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_example_config {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }
    if cli.list_cities {
        for city in FRENCH_CITIES.iter() {
            println!("{:<18} {:>8.4} {:>8.4}", city.name, city.latitude, city.longitude);
        }
        return Ok(());
    }

    let file: ConfigJson = match &cli.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => ConfigJson::default(),
    };
    let today = Local::now().date_naive();
    let settings = resolve_settings(&cli, file, today)?;
    let location = resolve_location(&cli)?;
    let date = cli.date.unwrap_or(today);

    tracing::info!(location = %location, %date, year = settings.year, "inputs resolved");

    let result = compute_optimal_angle(location.latitude(), &date, &settings.positions);
    let calendar = build_yearly_calendar(location.latitude(), settings.year, &settings.positions);

    if cli.json {
        let output = build_output(&location, date, &result, &calendar, &settings.positions);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!(
            "{}",
            render_text(&location, date, &result, &calendar, &settings.positions)?
        );
    }

    Ok(())
}
