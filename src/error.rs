//! Error types for polygon validation, geometry tests and catalog loading.

use thiserror::Error;

/// The query polygon could not be turned into a valid ring
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolygonError {
    #[error("polygon needs at least 4 coordinates, got {count}")]
    TooFewPoints { count: usize },

    #[error("coordinate {index} must be a [lon, lat] pair, got {len} values")]
    InvalidArity { index: usize, len: usize },

    #[error("coordinate {index} contains a non-finite value")]
    NonFinite { index: usize },
}

/// Failure of a single ring test. Never leaves the intersector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("degenerate polygon with zero area")]
    Degenerate,

    #[error("geometry computation failed: {0}")]
    Computation(String),
}

/// The country dataset could not be loaded
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog GeoJSON: {0}")]
    Parse(#[from] geojson::Error),

    #[error("catalog must be a FeatureCollection")]
    NotACollection,

    #[error("feature {index} has no geometry")]
    MissingGeometry { index: usize },

    #[error("feature {index} has unsupported geometry type {kind}")]
    UnsupportedGeometry { index: usize, kind: String },

    #[error("feature {index} is missing string property {property}")]
    MissingProperty { index: usize, property: &'static str },

    #[error("feature {index} has a position with fewer than 2 values")]
    InvalidPosition { index: usize },
}

/// Errors surfaced by the matcher's async entry point
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid polygon: {0}")]
    InvalidPolygon(#[from] PolygonError),

    #[error("matcher task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
