//! Borderline - find the countries a polygon overlaps
//!
//! This library provides the country catalog, polygon validation and the
//! matcher shared by the query server and the lookup tool.

pub mod catalog;
pub mod config;
pub mod error;
pub mod geometry;
pub mod matcher;
pub mod models;

pub use catalog::CountryCatalog;
pub use error::{CatalogError, MatchError, PolygonError};
pub use matcher::PolygonCountryMatcher;
pub use models::{CountryInfo, CountryRecord, CountryRegion, NOT_A_COUNTRY_CODE};
