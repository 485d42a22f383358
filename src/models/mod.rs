//! Core data models for the country lookup.

pub mod country;

pub use country::{CountryInfo, CountryRecord, CountryRegion, NOT_A_COUNTRY_CODE};
