use std::{error::Error, fs, path::Path};

use clap::Parser;
use geotag_pipeline::{run_geotagging, GeotagConfig, GeotagInput, GeotagReport};

/// Geotag target sightings from aerial imagery telemetry.
#[derive(Debug, Parser)]
#[command(author, version, about = "Sighting geotagging pipeline")]
struct Args {
    /// Path to JSON file containing GeotagInput.
    #[arg(long)]
    input: String,

    /// Optional path to JSON GeotagConfig. Defaults are used if omitted.
    #[arg(long)]
    config: Option<String>,
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, Box<dyn Error>> {
    let data = fs::read_to_string(path)
        .map_err(|err| format!("failed to read {}: {err}", path.display()))?;
    let value = serde_json::from_str(&data)
        .map_err(|err| format!("failed to parse {}: {err}", path.display()))?;
    Ok(value)
}

fn write_report_json(report: &GeotagReport) -> Result<String, Box<dyn Error>> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn run_geotagging_from_files(
    input_path: &str,
    config_path: Option<&str>,
) -> Result<String, Box<dyn Error>> {
    let input: GeotagInput = load_json_file(Path::new(input_path))?;

    let config = if let Some(cfg_path) = config_path {
        load_json_file::<GeotagConfig>(Path::new(cfg_path))?
    } else {
        GeotagConfig::default()
    };
    log::debug!("geotag config: {config:?}");

    let report = run_geotagging(&input, &config)?;
    write_report_json(&report)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = try_main() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let json = run_geotagging_from_files(&args.input, args.config.as_deref())?;
    println!("{}", json);
    Ok(())
}
