//! Lunar Information Tool
//!
//! Prints the Moon's position, rise time, phase and eclipse verdict for a
//! date and observer, as a table or as JSON.
//!
//! Usage:
//!   cargo run --bin moon_info -- [--latitude 40 --timezone -5] [--json] [DAY MONTH YEAR]

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use moonfield::almanac::shading::DiscHalf;
use moonfield::report::{LunarReport, TransitKind};
use moonfield::{CalendarDate, MoonCalculator, ObserverConfig};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Lunar Information Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Computes the Moon's position, rise time, phase and eclipse outlook for a date",
    long_about = None,
    allow_negative_numbers = true
)]
struct Args {
    /// Day of the month, may be fractional (defaults to today, UTC)
    #[arg(requires = "month")]
    day: Option<f64>,

    /// Month, 1-12
    #[arg(requires = "year")]
    month: Option<u32>,

    /// Year, 1900 or later
    year: Option<i32>,

    /// Observer latitude in degrees, north positive
    #[arg(long)]
    latitude: Option<f64>,

    /// Time zone offset from UTC in hours
    #[arg(long)]
    timezone: Option<f64>,

    /// Altitude of the Moon's centre that counts as rising, in degrees
    #[arg(long)]
    altitude: Option<f64>,

    /// JSON observer configuration; flags given on the command line win
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(short, long, action = ArgAction::SetTrue)]
    json: bool,

    /// Log calculation details to stderr
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}

fn observer_config(args: &Args) -> Result<ObserverConfig> {
    let mut config = match &args.config {
        Some(path) => ObserverConfig::from_json_file(path)?,
        None => ObserverConfig::default(),
    };
    if let Some(latitude) = args.latitude {
        config.latitude_deg = latitude;
    }
    if let Some(offset) = args.timezone {
        config.timezone_offset_hours = offset;
    }
    if let Some(altitude) = args.altitude {
        config.target_altitude_deg = altitude;
    }
    Ok(config)
}

fn report_date(args: &Args) -> Result<CalendarDate> {
    let date = match (args.day, args.month, args.year) {
        (Some(day), Some(month), Some(year)) => CalendarDate::new(day, month, year)?,
        _ => CalendarDate::today()?,
    };
    Ok(date)
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

/// Helper to print named values in a formatted way
fn print_named_value(name: &str, value: impl std::fmt::Display) {
    println!("{:<22}{}", format!("{}:", name), value);
}

fn display_position(report: &LunarReport) {
    print_section_header("Position");
    print_named_value("Julian date", format!("{:.1}", report.julian_date));
    print_named_value("Right ascension", format!("{:.3}°", report.right_ascension_deg));
    print_named_value("Declination", format!("{:.3}°", report.declination_deg));
    print_named_value(
        "Ecliptic longitude",
        format!("{:.3}°", report.position.apparent_longitude_deg),
    );
    print_named_value("Ecliptic latitude", format!("{:.3}°", report.position.latitude_deg));
    print_named_value("Distance", format!("{:.1} km", report.position.distance_km));
    print_named_value(
        "Nutation",
        format!(
            "Δψ {:.3}\"  Δε {:.3}\"",
            report.position.nutation.longitude_arcsec, report.position.nutation.obliquity_arcsec
        ),
    );
}

fn display_rise(report: &LunarReport, config: &ObserverConfig) {
    print_section_header("Observer");
    print_named_value("Latitude", format!("{:.3}°", config.latitude_deg));
    print_named_value("Time zone", format!("UTC{:+}", config.timezone_offset_hours));

    match (&report.rise, report.hour_angle_deg) {
        (Some(rise), Some(hour_angle)) => {
            print_named_value("Hour angle", format!("{:.3}°", hour_angle));
            if let Some(lst) = report.sidereal_time_deg {
                print_named_value("Sidereal time", format!("{:.3}°", lst));
            }
            print_named_value("Rise time", format!("{}:{}", rise.hour, rise.minute));
        }
        _ => {
            let note = match report.transit {
                TransitKind::AlwaysAbove => "above the horizon all day",
                TransitKind::NeverAbove => "below the horizon all day",
                TransitKind::Crosses => "no crossing",
            };
            print_named_value("Rise time", note);
        }
    }
}

fn display_phase(report: &LunarReport) {
    print_section_header("Phase");
    print_named_value("Phase", report.phase);
    print_named_value("Illumination", format!("{:.1}%", report.illumination_percent));
    let shading = if report.shading.fully_dark {
        "whole disc".to_string()
    } else {
        match report.shading.dark_half {
            Some(DiscHalf::Left) => "left half".to_string(),
            Some(DiscHalf::Right) => "right half".to_string(),
            None => "none".to_string(),
        }
    };
    print_named_value("Dark side", shading);
    print_named_value("Eclipse", report.eclipse);
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = observer_config(&args)?;
    let date = report_date(&args)?;
    let report = MoonCalculator::from_config(config).calculate(&date)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Moon on {}", report.date);
    println!("-------------------------------------------------------");
    display_position(&report);
    display_rise(&report, &config);
    display_phase(&report);

    Ok(())
}
