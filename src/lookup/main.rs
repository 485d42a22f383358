//! One-shot polygon lookup from the command line.
//!
//! Reads a JSON ring (`[[lon, lat], ...]`) from `--polygon` or stdin and
//! prints the matching countries as JSON.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use borderline::{catalog, PolygonCountryMatcher};

#[derive(Parser, Debug)]
#[command(name = "lookup")]
#[command(about = "Print the countries a polygon overlaps")]
struct Args {
    /// Country GeoJSON file, optionally gzipped
    #[arg(short, long)]
    catalog: PathBuf,

    /// Polygon as a JSON array of [lon, lat] pairs; read from stdin when omitted
    #[arg(short, long)]
    polygon: Option<String>,

    /// Test countries one at a time instead of on the thread pool
    #[arg(long)]
    sequential: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays plain JSON
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let raw = match args.polygon {
        Some(p) => p,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read polygon from stdin")?;
            buf
        }
    };
    let polygon: Vec<Vec<f64>> =
        serde_json::from_str(&raw).context("Polygon must be a JSON array of [lon, lat] pairs")?;

    let catalog = catalog::from_path(&args.catalog).with_context(|| {
        format!("Failed to load country catalog from {}", args.catalog.display())
    })?;
    let matcher = PolygonCountryMatcher::new(Arc::new(catalog)).with_parallel(!args.sequential);

    let countries = matcher.find_countries_by_polygon(&polygon)?;
    info!("Matched {} countries", countries.len());

    println!("{}", serde_json::to_string_pretty(&countries)?);
    Ok(())
}
