//! Query server for polygon-to-country lookups.
//!
//! Loads the country catalog once at startup and answers
//! `POST /v1/countries` with the countries a polygon overlaps.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use borderline::config::Config;
use borderline::{catalog, CountryInfo, MatchError, PolygonCountryMatcher};

#[derive(Parser, Debug)]
#[command(name = "query")]
#[command(about = "Polygon to country lookup server")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address (overrides config)
    #[arg(short, long)]
    listen: Option<String>,

    /// Country GeoJSON file (overrides config)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Application state shared across handlers
struct AppState {
    matcher: PolygonCountryMatcher,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };
    if let Some(listen) = args.listen {
        config.server.listen = listen;
    }
    if let Some(path) = args.catalog {
        config.catalog.path = path;
    }

    info!("Borderline Query Server");

    let catalog = catalog::from_path(&config.catalog.path).with_context(|| {
        format!(
            "Failed to load country catalog from {}",
            config.catalog.path.display()
        )
    })?;

    let matcher =
        PolygonCountryMatcher::new(Arc::new(catalog)).with_parallel(config.matcher.parallel);
    let app = router(Arc::new(AppState { matcher }));

    info!("Starting server on {}", config.server.listen);

    let listener = tokio::net::TcpListener::bind(&config.server.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/v1/countries", post(countries_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        countries: state.matcher.catalog().len(),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    countries: usize,
}

/// Countries overlapping the posted polygon.
///
/// A body that is not a ring of number pairs is an invalid polygon too, so
/// every request problem answers 400.
async fn countries_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CountriesRequest>, JsonRejection>,
) -> Result<Json<CountriesResponse>, (StatusCode, String)> {
    let Json(request) = payload.map_err(|e| (StatusCode::BAD_REQUEST, e.body_text()))?;

    let countries = state
        .matcher
        .find_countries_by_polygon_async(request.polygon)
        .await
        .map_err(|e| match e {
            MatchError::InvalidPolygon(_) => (StatusCode::BAD_REQUEST, e.to_string()),
            MatchError::Task(_) => {
                tracing::error!("Country lookup failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        })?;

    Ok(Json(CountriesResponse { countries }))
}

#[derive(Deserialize)]
struct CountriesRequest {
    /// Ring of [lon, lat] pairs
    polygon: Vec<Vec<f64>>,
}

#[derive(Serialize)]
struct CountriesResponse {
    countries: Vec<CountryInfo>,
}
